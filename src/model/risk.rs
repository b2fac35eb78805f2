use chrono::NaiveDate;

use crate::model::work_item::WorkItem;

pub const DEFAULT_DUE_SOON_DAYS: i64 = 10;

/// Visual grouping of a roadmap card by delivery risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    Completed,
    Overdue,
    DueSoon,
    Future,
    /// No due date; rendered without a risk color.
    Unscheduled,
}

impl RiskCategory {
    /// Categories shown in the risk legend, in legend order.
    pub const LEGEND: [RiskCategory; 4] = [
        RiskCategory::Completed,
        RiskCategory::Overdue,
        RiskCategory::DueSoon,
        RiskCategory::Future,
    ];

    pub fn label(&self, due_soon_days: i64) -> String {
        match self {
            RiskCategory::Completed => "Concluído".into(),
            RiskCategory::Overdue => "Atrasado".into(),
            RiskCategory::DueSoon => format!("Próximos {due_soon_days} dias"),
            RiskCategory::Future => format!("Futuro (>{due_soon_days} dias)"),
            RiskCategory::Unscheduled => "Sem data".into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskCategory::Completed => "bg-green-100",
            RiskCategory::Overdue => "bg-red-100",
            RiskCategory::DueSoon => "bg-yellow-100",
            RiskCategory::Future => "bg-blue-100",
            RiskCategory::Unscheduled => "bg-white",
        }
    }
}

/// Status wins over dates: a done item is never overdue.
pub fn classify(item: &WorkItem, today: NaiveDate, due_soon_days: i64) -> RiskCategory {
    if item.is_done() {
        return RiskCategory::Completed;
    }
    let Some(due) = item.due else {
        return RiskCategory::Unscheduled;
    };
    if due < today {
        return RiskCategory::Overdue;
    }
    if (due - today).num_days() <= due_soon_days {
        RiskCategory::DueSoon
    } else {
        RiskCategory::Future
    }
}
