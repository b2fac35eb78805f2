use chrono::NaiveDate;
use std::fmt;

pub const UNKNOWN_ISSUER: &str = "Sem emissor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub key: String,
    pub summary: String,
    pub issuer: String,
    pub item_type: String,
    /// Effort category ("Conta de Esforço"), e.g. Evolução or Sustentação.
    pub effort: String,
    pub status: Status,
    pub due: Option<NaiveDate>,
    pub completed: Option<NaiveDate>,
}

impl WorkItem {
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Backlog,
    Done,
    Discovery,
    InAnalysis,
    InProgress,
    InHomologation,
    PendingTasks,
    Other(String),
}

impl Status {
    pub const KNOWN: [Status; 7] = [
        Status::Backlog,
        Status::Done,
        Status::Discovery,
        Status::InAnalysis,
        Status::InProgress,
        Status::InHomologation,
        Status::PendingTasks,
    ];

    /// Parse a raw status cell. Unrecognized values are kept verbatim as `Other`.
    pub fn parse(raw: &str) -> Status {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "backlog" => Status::Backlog,
            "concluido" | "concluído" | "done" => Status::Done,
            "discover" | "discovery" => Status::Discovery,
            "em análise" | "em analise" => Status::InAnalysis,
            "em andamento" => Status::InProgress,
            "em homologação" | "em homologacao" => Status::InHomologation,
            "tarefas pendentes" => Status::PendingTasks,
            _ => Status::Other(trimmed.to_string()),
        }
    }

    /// Stable identifier used as the theme lookup key.
    pub fn key(&self) -> &str {
        match self {
            Status::Backlog => "backlog",
            Status::Done => "done",
            Status::Discovery => "discovery",
            Status::InAnalysis => "in_analysis",
            Status::InProgress => "in_progress",
            Status::InHomologation => "in_homologation",
            Status::PendingTasks => "pending_tasks",
            Status::Other(_) => "default",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::Backlog => "BACKLOG",
            Status::Done => "Concluido",
            Status::Discovery => "Discover",
            Status::InAnalysis => "Em análise",
            Status::InProgress => "Em andamento",
            Status::InHomologation => "Em homologação",
            Status::PendingTasks => "Tarefas pendentes",
            Status::Other(label) => label,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
