//! Controller Integration Tests
//!
//! Tests for the feature controllers over an in-memory store.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::{Duration, TimeZone, Utc};

    use crate::clock::ManualClock;
    use crate::config::{FeatureArea, StorageConfig};
    use crate::controller::{
        ClientOperations, Console, Direction, InventoryOperations, ListController, QueueOperations,
    };
    use crate::domain::{ClientForm, ClientPatch, ConsumableForm, DomainError, InventoryForm, QueueEntry, QueueForm};
    use crate::repository::{FileStore, KeyValueStore, MemoryStore};

    fn clock() -> Rc<ManualClock> {
        Rc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()))
    }

    fn setup_console() -> (Console<MemoryStore>, MemoryStore, Rc<ManualClock>) {
        let store = MemoryStore::new();
        let clock = clock();
        let console = Console::with_clock(store.clone(), &StorageConfig::default(), clock.clone());
        (console, store, clock)
    }

    fn client_form(name: &str, date: &str) -> ClientForm {
        ClientForm {
            name: name.to_string(),
            date: date.to_string(),
            professional: "Bia".to_string(),
            service: "Corte".to_string(),
        }
    }

    fn queue_form(name: &str) -> QueueForm {
        QueueForm {
            name: name.to_string(),
            depilation_type: "Meia perna".to_string(),
            ..Default::default()
        }
    }

    fn inventory_form(name: &str, quantity: &str, min_quantity: &str) -> InventoryForm {
        InventoryForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            min_quantity: min_quantity.to_string(),
        }
    }

    fn orders(entries: &[QueueEntry]) -> Vec<(String, u32)> {
        entries.iter().map(|e| (e.name.clone(), e.order)).collect()
    }

    #[test]
    fn test_create_and_toggle_client() {
        let (mut console, _, _) = setup_console();

        let ana = console.clients.create(&client_form("Ana", "2024-01-10")).expect("Failed to create");
        assert_eq!(console.clients.len(), 1);
        assert!(!ana.served);

        assert!(console.clients.toggle_served(&ana.id).unwrap().served);
        assert!(!console.clients.toggle_served(&ana.id).unwrap().served);
        assert_eq!(console.clients.find(&ana.id).unwrap().name, "Ana");
    }

    #[test]
    fn test_served_count_follows_toggles() {
        let (mut console, _, clock) = setup_console();
        let ana = console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();
        clock.advance(Duration::seconds(1));
        console.clients.create(&client_form("Bruna", "2024-01-11")).unwrap();
        assert_eq!(console.clients.served_count(), 0);

        console.clients.toggle_served(&ana.id).unwrap();
        assert_eq!(console.clients.served_count(), 1);
        assert_eq!(console.clients.len(), 2);
    }

    #[test]
    fn test_clear_empties_only_its_slot() {
        let (mut console, store, _) = setup_console();
        console.queue.create(&queue_form("A")).unwrap();
        console.inventory.create(&inventory_form("Shampoo", "5", "1")).unwrap();

        console.queue.clear().unwrap();
        assert!(console.queue.is_empty());
        assert_eq!(console.inventory.len(), 1);

        let config = StorageConfig::default();
        assert_eq!(store.get(&config.key(FeatureArea::Queue)).unwrap().as_deref(), Some("[]"));

        let next = console.queue.create(&queue_form("B")).unwrap();
        assert_eq!(next.order, 1);
    }

    #[test]
    fn test_clients_are_prepended() {
        let (mut console, _, clock) = setup_console();
        console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();
        clock.advance(Duration::seconds(1));
        console.clients.create(&client_form("Bruna", "2024-01-10")).unwrap();

        let names: Vec<&str> = console.clients.items().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bruna", "Ana"]);
    }

    #[test]
    fn test_same_millisecond_ids_are_unique() {
        let (mut console, _, _) = setup_console();
        let a = console.clients.create(&client_form("Ana", "")).unwrap();
        let b = console.clients.create(&client_form("Bruna", "")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.date, "2024-01-10");
    }

    #[test]
    fn test_blank_name_rejected_everywhere() {
        let (mut console, store, _) = setup_console();

        let missing = |e: DomainError| matches!(e, DomainError::MissingRequiredField(_));
        assert!(missing(console.clients.create(&client_form("", "2024-01-10")).unwrap_err()));
        assert!(missing(console.queue.create(&queue_form("")).unwrap_err()));
        assert!(missing(console.inventory.create(&inventory_form("", "1", "0")).unwrap_err()));
        assert!(missing(console.consumables.create(&ConsumableForm::default()).unwrap_err()));

        assert!(console.clients.is_empty());
        assert!(console.queue.is_empty());
        assert!(console.inventory.is_empty());
        assert!(console.consumables.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let (mut console, _, _) = setup_console();
        console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();

        let patch = ClientPatch {
            service: Some("Escova".to_string()),
            ..Default::default()
        };
        assert_eq!(console.clients.update("nope", &patch), Err(DomainError::not_found("nope")));
        assert_eq!(console.clients.remove("nope").unwrap_err(), DomainError::not_found("nope"));
        assert_eq!(console.clients.len(), 1);
    }

    #[test]
    fn test_update_client_fields() {
        let (mut console, _, _) = setup_console();
        let ana = console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();

        let patch = ClientPatch {
            service: Some("Escova".to_string()),
            ..Default::default()
        };
        let updated = console.clients.update(&ana.id, &patch).unwrap();
        assert_eq!(updated.service, "Escova");
        assert_eq!(updated.created_at, ana.created_at);
    }

    #[test]
    fn test_consumable_log_newest_first() {
        let (mut console, _, clock) = setup_console();
        let form = |professional: &str| ConsumableForm {
            professional: professional.to_string(),
            date: "2024-01-10".to_string(),
            notes: String::new(),
        };
        console.consumables.create(&form("Bia")).unwrap();
        clock.advance(Duration::minutes(5));
        let latest = console.consumables.create(&form("Carla")).unwrap();
        assert_eq!(console.consumables.items()[0].id, latest.id);

        console.consumables.remove(&latest.id).unwrap();
        assert_eq!(console.consumables.items()[0].professional, "Bia");
    }

    #[test]
    fn test_queue_append_and_reorder() {
        let (mut console, _, _) = setup_console();
        let a = console.queue.create(&queue_form("A")).unwrap();
        let b = console.queue.create(&queue_form("B")).unwrap();
        console.queue.create(&queue_form("C")).unwrap();
        assert_eq!(a.order, 1);
        assert_eq!(b.order, 2);

        assert!(console.queue.reorder(&b.id, Direction::Up).unwrap());
        assert_eq!(
            orders(console.queue.items()),
            vec![("B".to_string(), 1), ("A".to_string(), 2), ("C".to_string(), 3)]
        );

        assert!(!console.queue.reorder(&b.id, Direction::Up).unwrap());
        assert_eq!(console.queue.next_up().unwrap().id, b.id);

        let last = console.queue.items()[2].id.clone();
        assert!(!console.queue.reorder(&last, Direction::Down).unwrap());
        assert!(console.queue.reorder("missing", Direction::Down).is_err());
    }

    #[test]
    fn test_queue_head_move_up_is_noop_without_write() {
        let (mut console, store, _) = setup_console();
        let a = console.queue.create(&queue_form("A")).unwrap();
        let key = StorageConfig::default().key(FeatureArea::Queue);
        let before = store.get(&key).unwrap();

        assert!(!console.queue.reorder(&a.id, Direction::Up).unwrap());
        assert_eq!(store.get(&key).unwrap(), before);
    }

    #[test]
    fn test_queue_remove_closes_gap() {
        let (mut console, _, _) = setup_console();
        console.queue.create(&queue_form("A")).unwrap();
        let b = console.queue.create(&queue_form("B")).unwrap();
        console.queue.create(&queue_form("C")).unwrap();

        console.queue.remove(&b.id).unwrap();
        assert_eq!(orders(console.queue.items()), vec![("A".to_string(), 1), ("C".to_string(), 2)]);
    }

    #[test]
    fn test_queue_repairs_stored_order_on_open() {
        let store = MemoryStore::new();
        let key = StorageConfig::default().key(FeatureArea::Queue);
        store
            .set(
                &key,
                r#"[{"id":"1","nome":"A","tipoDepilacao":"Axila","profissional":"","data":"2024-01-10","ordem":3,"criadoEm":"2024-01-10T12:00:00Z"},
                    {"id":"2","nome":"B","tipoDepilacao":"Axila","profissional":"","data":"2024-01-10","ordem":3,"criadoEm":"2024-01-10T12:00:01Z"}]"#,
            )
            .unwrap();

        let queue: ListController<QueueEntry, _> = ListController::open(store, key);
        assert_eq!(orders(queue.items()), vec![("A".to_string(), 1), ("B".to_string(), 2)]);
    }

    #[test]
    fn test_inventory_adjust_reports_low_stock() {
        let (mut console, _, _) = setup_console();
        let item = console.inventory.create(&inventory_form("Shampoo", "2", "3")).unwrap();
        assert!(item.is_low_stock());
        assert_eq!(console.inventory.low_stock_count(), 1);

        let up = console.inventory.adjust_quantity(&item.id, 2).unwrap();
        assert_eq!(up.item.quantity, 4);
        assert!(!up.low_stock);

        let down = console.inventory.adjust_quantity(&item.id, -10).unwrap();
        assert_eq!(down.item.quantity, 0);
        assert!(down.low_stock);
        assert_eq!(console.inventory.find(&item.id).unwrap().quantity, 0);
    }

    #[test]
    fn test_inventory_edit_replaces_fields() {
        let (mut console, _, _) = setup_console();
        let item = console.inventory.create(&inventory_form("Shampoo", "2", "3")).unwrap();

        let edited = console
            .inventory
            .edit(&item.id, &inventory_form("Shampoo Neutro", "12", "4"))
            .unwrap();
        assert_eq!(edited.name, "Shampoo Neutro");
        assert_eq!(edited.quantity, 12);
        assert_eq!(edited.min_quantity, 4);

        assert!(console.inventory.edit(&item.id, &inventory_form(" ", "1", "1")).is_err());
        assert_eq!(console.inventory.find(&item.id).unwrap().name, "Shampoo Neutro");
    }

    #[test]
    fn test_console_reopens_from_same_store() {
        let (mut console, store, clock) = setup_console();
        console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();
        console.inventory.create(&inventory_form("Shampoo", "5", "1")).unwrap();

        let reopened = Console::with_clock(store, &StorageConfig::default(), clock);
        assert_eq!(reopened.clients.items(), console.clients.items());
        assert_eq!(reopened.inventory.items(), console.inventory.items());
        assert!(reopened.queue.is_empty());
    }

    #[test]
    fn test_feature_areas_are_isolated() {
        let (mut console, store, _) = setup_console();
        console.clients.create(&client_form("Ana", "2024-01-10")).unwrap();

        let config = StorageConfig::default();
        assert!(store.get(&config.key(FeatureArea::Clients)).unwrap().is_some());
        assert!(store.get(&config.key(FeatureArea::Inventory)).unwrap().is_none());
    }

    #[test]
    fn test_console_over_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::default();

        let mut console = Console::with_clock(FileStore::open(dir.path()).unwrap(), &config, clock());
        console.queue.create(&queue_form("A")).unwrap();
        console.queue.create(&queue_form("B")).unwrap();
        assert!(dir.path().join("espacosow_depilacao.json").exists());

        let reopened = Console::with_clock(FileStore::open(dir.path()).unwrap(), &config, clock());
        assert_eq!(orders(reopened.queue.items()), vec![("A".to_string(), 1), ("B".to_string(), 2)]);
        assert!(reopened.clients.is_empty());
    }
}
