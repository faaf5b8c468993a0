use chrono::Utc;
use log::info;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::models::{
    contact::{Contact, ContactUpdate, NewContact},
    transaction::{NewTransaction, Transaction, TransactionKind, TransactionStatus},
    user::{NewUser, PreferencesUpdate, User},
};

const STARTING_BALANCE: f64 = 2500.0;
const DEFAULT_CURRENCY: &str = "USD";

struct State {
    users: HashMap<u32, User>,
    transactions: HashMap<u32, Transaction>,
    contacts: HashMap<u32, Contact>,
    user_id_counter: u32,
    transaction_id_counter: u32,
    contact_id_counter: u32,
}

impl State {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            transactions: HashMap::new(),
            contacts: HashMap::new(),
            user_id_counter: 1,
            transaction_id_counter: 1,
            contact_id_counter: 1,
        }
    }
}

/// Process-local store for users, transactions and contacts. Clones share state;
/// concurrent writers simply overwrite each other.
#[derive(Clone)]
pub struct MemStore {
    state: Arc<RwLock<State>>,
}

impl MemStore {
    pub fn empty() -> Self {
        MemStore {
            state: Arc::new(RwLock::new(State::new())),
        }
    }

    /// A store holding the demo user and a few completed transactions.
    pub async fn init() -> Self {
        let store = MemStore::empty();
        store
            .create_user(NewUser {
                username: "johndoe".to_string(),
                email: "john@example.com".to_string(),
                full_name: Some("John Doe".to_string()),
                send_currency: None,
                receive_currency: None,
            })
            .await;

        let seed = [
            (TransactionKind::Send, 120.0, "Sarah Johnson", "Rent payment"),
            (TransactionKind::Receive, 245.0, "you@example.com", "Invoice #1234"),
            (TransactionKind::Send, 35.99, "Netflix", "Monthly subscription"),
        ];
        for (kind, amount, recipient, note) in seed {
            store
                .create_transaction(NewTransaction {
                    kind,
                    amount,
                    recipient: recipient.to_string(),
                    note: Some(note.to_string()),
                    status: Some(TransactionStatus::Completed),
                    currency: None,
                })
                .await;
        }
        info!("Seeded in-memory store");
        store
    }

    pub async fn get_user(&self, id: u32) -> Option<User> {
        self.state.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub async fn create_user(&self, record: NewUser) -> User {
        let mut state = self.state.write().await;
        let id = state.user_id_counter;
        state.user_id_counter += 1;

        let user = User {
            id,
            username: record.username,
            email: record.email,
            full_name: record.full_name,
            balance: STARTING_BALANCE,
            send_currency: record
                .send_currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            receive_currency: record
                .receive_currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            two_factor_enabled: false,
            stripe_account_id: None,
        };
        state.users.insert(id, user.clone());
        user
    }

    pub async fn update_user_preferences(
        &self,
        id: u32,
        preferences: PreferencesUpdate,
    ) -> Option<User> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id)?;
        preferences.apply(user);
        Some(user.clone())
    }

    /// Newest first; ties broken by the higher id.
    pub async fn all_transactions(&self) -> Vec<Transaction> {
        let state = self.state.read().await;
        let mut records: Vec<Transaction> = state.transactions.values().cloned().collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        records
    }

    pub async fn get_transaction(&self, id: u32) -> Option<Transaction> {
        self.state.read().await.transactions.get(&id).cloned()
    }

    pub async fn create_transaction(&self, record: NewTransaction) -> Transaction {
        let mut state = self.state.write().await;
        let id = state.transaction_id_counter;
        state.transaction_id_counter += 1;

        let transaction = Transaction {
            id,
            kind: record.kind,
            amount: record.amount,
            recipient: record.recipient,
            note: record.note,
            timestamp: Utc::now(),
            status: record.status.unwrap_or_default(),
            currency: record
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };
        state.transactions.insert(id, transaction.clone());
        transaction
    }

    pub async fn update_transaction_status(
        &self,
        id: u32,
        status: TransactionStatus,
    ) -> Option<Transaction> {
        let mut state = self.state.write().await;
        let transaction = state.transactions.get_mut(&id)?;
        transaction.status = status;
        Some(transaction.clone())
    }

    /// Contacts owned by `user_id`, ordered by name.
    pub async fn contacts_for_user(&self, user_id: u32) -> Vec<Contact> {
        let state = self.state.read().await;
        let mut records: Vec<Contact> = state
            .contacts
            .values()
            .filter(|contact| contact.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        records
    }

    pub async fn get_contact(&self, id: u32) -> Option<Contact> {
        self.state.read().await.contacts.get(&id).cloned()
    }

    pub async fn create_contact(&self, user_id: u32, record: NewContact) -> Contact {
        let mut state = self.state.write().await;
        let id = state.contact_id_counter;
        state.contact_id_counter += 1;

        let contact = Contact {
            id,
            user_id,
            name: record.name,
            email: record.email,
            address: record.address,
            phone: record.phone,
            notes: record.notes,
            favorite: record.favorite.unwrap_or(false),
            created_at: Utc::now(),
        };
        state.contacts.insert(id, contact.clone());
        contact
    }

    pub async fn update_contact(&self, id: u32, update: ContactUpdate) -> Option<Contact> {
        let mut state = self.state.write().await;
        let contact = state.contacts.get_mut(&id)?;
        update.apply(contact);
        Some(contact.clone())
    }

    pub async fn delete_contact(&self, id: u32) -> bool {
        self.state.write().await.contacts.remove(&id).is_some()
    }
}
