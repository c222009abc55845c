//! Integration tests for frozen registries and counters.

use dungeon_foundation::{
    CounterMap, ErrorKind, Id, Identified, Name, Registry, RegistryBuilder, Selectable,
};

#[derive(Debug, PartialEq)]
struct Door {
    id: Id,
    name: Name,
}

impl Door {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: Id::new(id),
            name: Name::new(name),
        }
    }
}

impl Identified for Door {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Selectable for Door {
    fn name(&self) -> &Name {
        &self.name
    }
}

fn doors() -> Registry<Door> {
    let mut builder = RegistryBuilder::new("door");
    builder.insert(Door::new("OAK", "Oak Door")).unwrap();
    builder.insert(Door::new("IRON", "Iron Door")).unwrap();
    builder.freeze()
}

#[test]
fn registry_lookup_by_str_and_id() {
    let doors = doors();
    assert_eq!(doors.len(), 2);
    assert_eq!(doors.label(), "door");
    assert_eq!(doors.get("OAK").unwrap().name().singular(), "Oak Door");
    assert!(doors.contains(&Id::new("IRON")));
    assert!(doors.get("PINE").is_none());
}

#[test]
fn registry_rejects_duplicates() {
    let mut builder = RegistryBuilder::new("door");
    builder.insert(Door::new("OAK", "Oak Door")).unwrap();
    let err = builder.insert(Door::new("OAK", "Other Door")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateId { registry: "door", .. }));
}

#[test]
fn registry_clones_share_entries() {
    let doors = doors();
    let copy = doors.clone();
    let a = doors.get_shared("OAK").unwrap();
    let b = copy.get_shared("OAK").unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn counter_map_collects_and_sums() {
    let counters: CounterMap<&str> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    assert_eq!(counters.get(&"a"), 4);
    assert_eq!(counters.get(&"b"), 2);
    assert_eq!(counters.get(&"c"), 0);
    assert_eq!(counters.total(), 6);
    assert_eq!(counters.len(), 2);
}
