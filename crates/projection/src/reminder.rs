//! Which day counts call for a reminder.

/// Fixed reminder offsets before a birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReminderKind {
    /// On the birthday.
    OnDay,
    /// One day before.
    DayBefore,
    /// Three days before.
    ThreeDaysBefore,
    /// Seven days before.
    OneWeekBefore,
    /// Fourteen days before.
    TwoWeeksBefore,
    /// Thirty days before.
    OneMonthBefore,
}

impl ReminderKind {
    /// Every kind, nearest first.
    pub const ALL: [ReminderKind; 6] = [
        ReminderKind::OnDay,
        ReminderKind::DayBefore,
        ReminderKind::ThreeDaysBefore,
        ReminderKind::OneWeekBefore,
        ReminderKind::TwoWeeksBefore,
        ReminderKind::OneMonthBefore,
    ];

    /// Days before the birthday this reminder fires.
    pub fn days_before(self) -> u32 {
        match self {
            ReminderKind::OnDay => 0,
            ReminderKind::DayBefore => 1,
            ReminderKind::ThreeDaysBefore => 3,
            ReminderKind::OneWeekBefore => 7,
            ReminderKind::TwoWeeksBefore => 14,
            ReminderKind::OneMonthBefore => 30,
        }
    }

    /// The kind that fires at exactly `days_until`, if any.
    pub fn at(days_until: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.days_before() == days_until)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Delivery priority of a reminder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Regular reminder.
    #[default]
    Normal,
    /// The birthday is today or tomorrow.
    High,
}

/// A reminder that is due for a birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reminder {
    kind: ReminderKind,
    priority: Priority,
}

impl Reminder {
    /// Which offset fired.
    pub fn kind(&self) -> ReminderKind {
        self.kind
    }

    /// Delivery priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Set of enabled reminder offsets.
///
/// Defaults enable the day itself, one day, three days and one week before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    enabled: [bool; 6],
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self {
            enabled: [true, true, true, true, false, false],
        }
    }
}

impl ReminderSchedule {
    /// Creates the default schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule with every offset disabled.
    pub fn none() -> Self {
        Self {
            enabled: [false; 6],
        }
    }

    /// Enables or disables one offset.
    pub fn with(mut self, kind: ReminderKind, enabled: bool) -> Self {
        self.enabled[kind.index()] = enabled;
        self
    }

    /// Returns `true` if `kind` is enabled.
    pub fn is_enabled(&self, kind: ReminderKind) -> bool {
        self.enabled[kind.index()]
    }

    /// Returns the reminder due at `days_until`, if its offset is enabled.
    pub fn due(&self, days_until: u32) -> Option<Reminder> {
        let kind = ReminderKind::at(days_until)?;
        if !self.is_enabled(kind) {
            return None;
        }
        let priority = if days_until <= 1 {
            Priority::High
        } else {
            Priority::Normal
        };
        Some(Reminder { kind, priority })
    }
}
