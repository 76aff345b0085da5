use crate::domain::model::Client;
use crate::utils::error::{FinderError, Result};
use std::collections::HashSet;

/// The session's client list. Populated once, never mutated afterwards;
/// filtered views are always derived copies.
#[derive(Debug, Clone)]
pub struct ClientStore {
    clients: Vec<Client>,
}

impl ClientStore {
    /// Builds a store, rejecting duplicate ids. Order is preserved as given.
    pub fn new(clients: Vec<Client>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(clients.len());
        for client in &clients {
            if !seen.insert(client.id.as_str()) {
                return Err(FinderError::DuplicateClientIdError {
                    id: client.id.clone(),
                });
            }
        }
        Ok(Self { clients })
    }

    /// The built-in seed set used when no store file is configured.
    pub fn builtin() -> Self {
        Self {
            clients: seed_clients(),
        }
    }

    /// Parses a JSON array of clients, then applies the same invariants
    /// as [`ClientStore::new`].
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let clients: Vec<Client> = serde_json::from_slice(bytes)?;
        Self::new(clients)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn into_clients(self) -> Vec<Client> {
        self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

fn client(
    id: &str,
    name: &str,
    company: &str,
    industry: &str,
    needs: &[&str],
    score: u8,
    contact: &str,
    source: &str,
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        industry: industry.to_string(),
        needs: needs.iter().map(|n| n.to_string()).collect(),
        score,
        contact: contact.to_string(),
        source: source.to_string(),
        found_at: None,
    }
}

/// The original five-record seed set, verbatim.
pub fn seed_clients() -> Vec<Client> {
    vec![
        client(
            "1",
            "Алексей Иванов",
            "ТехноСтарт",
            "IT-стартапы",
            &["Автоматизация продаж", "CRM-система"],
            95,
            "a.ivanov@techstart.ru",
            "LinkedIn",
        ),
        client(
            "2",
            "Мария Петрова",
            "Ритейл Про",
            "Розничная торговля",
            &["Управление складом", "Аналитика продаж"],
            88,
            "m.petrova@retail.ru",
            "HeadHunter",
        ),
        client(
            "3",
            "Дмитрий Соколов",
            "Финансовые Решения",
            "Финансы",
            &["Интеграция API", "Безопасность данных"],
            92,
            "d.sokolov@fin.ru",
            "Habr Career",
        ),
        client(
            "4",
            "Елена Смирнова",
            "МедТех Инновации",
            "Медицинские технологии",
            &["Мобильное приложение", "База данных пациентов"],
            85,
            "e.smirnova@medtech.ru",
            "VC.ru",
        ),
        client(
            "5",
            "Сергей Волков",
            "ЭкоСтрой",
            "Строительство",
            &["Учет материалов", "Планирование проектов"],
            79,
            "s.volkov@ecostroy.ru",
            "Telegram",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_integrity() {
        let store = ClientStore::builtin();
        assert_eq!(store.len(), 5);

        let ids: Vec<&str> = store.clients().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        let scores: Vec<u8> = store.clients().iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![95, 88, 92, 85, 79]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut clients = seed_clients();
        clients[4].id = "1".to_string();

        let err = ClientStore::new(clients).unwrap_err();
        assert!(matches!(
            err,
            FinderError::DuplicateClientIdError { ref id } if id == "1"
        ));
    }

    #[test]
    fn from_json_roundtrip() {
        let bytes = serde_json::to_vec(&seed_clients()).unwrap();
        let store = ClientStore::from_json(&bytes).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.clients()[2].industry, "Финансы");
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(ClientStore::from_json(b"{\"not\": \"an array\"}").is_err());
    }

    #[test]
    fn empty_store_is_legal() {
        let store = ClientStore::from_json(b"[]").unwrap();
        assert!(store.is_empty());
    }
}
