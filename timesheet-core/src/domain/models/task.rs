use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The fixed list of tasks an entry can be booked against.
///
/// The strings are stored verbatim in the `Task` column, so they must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum Task {
    #[strum(serialize = "Annual Return Data Preparation")]
    AnnualReturnDataPreparation,
    #[strum(serialize = "Idle Time")]
    IdleTime,
    #[strum(serialize = "Automation")]
    Automation,
    #[strum(serialize = "Monthly Compliances")]
    MonthlyCompliances,
    #[strum(serialize = "MIS Working (Mention Client Wise)")]
    MisWorking,
    #[strum(serialize = "Litigation Support")]
    LitigationSupport,
    #[strum(serialize = "Support in Taking New Registration")]
    NewRegistrationSupport,
    #[strum(serialize = "Support in Refund Filing / Working")]
    RefundFilingSupport,
    #[strum(serialize = "Amendments in the Existing Registration (Core / Non-core)")]
    RegistrationAmendments,
    #[strum(serialize = "Other Work - Any other please specify in Remarks Column")]
    OtherWork,
    #[strum(serialize = "Leave")]
    Leave,
    #[strum(serialize = "Trainings")]
    Trainings,
    #[strum(serialize = "CAD Practice Set-Up")]
    CadPracticeSetUp,
}

impl Task {
    /// Tasks in the order they are offered to the user.
    pub fn all() -> impl Iterator<Item = Task> {
        Task::iter()
    }

    /// Booking the "other work" task requires remarks explaining it.
    pub fn requires_remarks(self) -> bool {
        self == Task::OtherWork
    }
}
