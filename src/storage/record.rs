use crate::allocator::Identifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub identifier: Identifier,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(identifier: Identifier, draft: RecordDraft) -> Self {
        Record {
            identifier,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: draft.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<String>,
}

impl RecordDraft {
    pub fn new(name: &str, email: &str) -> Self {
        RecordDraft {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: None,
            status: None,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_owned());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_owned());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::allocator::{Category, Identifier};
    use crate::storage::{Record, RecordDraft};

    #[test]
    fn record_from_draft_is_correct() {
        let draft = RecordDraft::new("Alice Park", "alice@corp.test")
            .with_phone("555-0101")
            .with_status("new");

        let record = Record::new(Identifier::format(Category::Customer, 1), draft);

        assert_eq!("CS001", record.identifier.as_str());
        assert_eq!("Alice Park", record.name);
        assert_eq!("alice@corp.test", record.email);
        assert_eq!(Some("555-0101".to_owned()), record.phone);
        assert_eq!("new", record.status);
    }

    #[test]
    fn draft_status_defaults_to_active() {
        let draft = RecordDraft::new("Bob Lund", "bob@corp.test");
        let record = Record::new(Identifier::format(Category::Staff, 1), draft);

        assert_eq!("active", record.status);
        assert_eq!(None, record.phone);
    }
}
