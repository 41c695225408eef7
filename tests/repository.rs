use std::fs;
use std::thread;

use spp_inventory::domain::part::{NewOemPart, OemPartPatch};
use spp_inventory::domain::types::{Price, RecordId};
use spp_inventory::domain::wheel::NewWheel;
use spp_inventory::repository::{
    OemPartReader, OemPartWriter, RepositoryError, WheelReader, WheelWriter,
};

mod common;

fn sample_part(part_number: &str) -> NewOemPart {
    NewOemPart {
        part_number: part_number.to_string(),
        part_name: "Strut mount".to_string(),
        quantity: 2,
        price: Price::parse("35.00", "price").expect("valid price"),
        ..NewOemPart::default()
    }
}

#[test]
fn insert_round_trips_with_store_assigned_fields() {
    let env = common::TestEnv::new();
    let created = env
        .repo
        .create_part(sample_part("20700AE01A"), Some("tester"))
        .expect("should create part");

    let parts = env.repo.list_parts().expect("should list parts");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], created);
    assert_eq!(parts[0].part_number, "20700AE01A");
    assert_eq!(parts[0].created_by.as_deref(), Some("tester"));
    assert!(parts[0].updated_at.is_none());
}

#[test]
fn update_merges_patch_over_existing_fields() {
    let env = common::TestEnv::new();
    let created = env
        .repo
        .create_part(sample_part("20700AE01A"), None)
        .expect("should create part");

    let updated = env
        .repo
        .update_part(
            created.id,
            OemPartPatch {
                quantity: Some(7),
                ..OemPartPatch::default()
            },
            Some("editor"),
        )
        .expect("should update part");

    assert_eq!(updated.quantity, 7);
    // Untouched fields are retained.
    assert_eq!(updated.part_number, created.part_number);
    assert_eq!(updated.part_name, created.part_name);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.updated_by.as_deref(), Some("editor"));
    assert!(updated.updated_at.expect("updated stamp") > created.created_at);
}

#[test]
fn sequential_updates_both_reflect_in_final_state() {
    let env = common::TestEnv::new();
    let created = env
        .repo
        .create_part(sample_part("20700AE01A"), None)
        .expect("should create part");

    env.repo
        .update_part(
            created.id,
            OemPartPatch {
                price: Some(Price::parse("42.00", "price").unwrap()),
                ..OemPartPatch::default()
            },
            None,
        )
        .expect("first update");
    env.repo
        .update_part(
            created.id,
            OemPartPatch {
                location: Some("Shelf B3".to_string()),
                ..OemPartPatch::default()
            },
            None,
        )
        .expect("second update");

    let part = env
        .repo
        .get_part_by_id(created.id)
        .expect("should read part")
        .expect("part should exist");
    assert_eq!(part.price.to_string(), "42.00");
    assert_eq!(part.location.as_deref(), Some("Shelf B3"));
}

#[test]
fn delete_removes_exactly_one_record() {
    let env = common::TestEnv::new();
    let keep = env
        .repo
        .create_part(sample_part("KEEP-1"), None)
        .expect("should create part");
    let remove = env
        .repo
        .create_part(sample_part("DROP-1"), None)
        .expect("should create part");

    let removed = env.repo.delete_part(remove.id).expect("should delete part");
    assert_eq!(removed.id, remove.id);

    let parts = env.repo.list_parts().expect("should list parts");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, keep.id);
}

#[test]
fn deleting_a_missing_id_fails_and_leaves_the_collection() {
    let env = common::TestEnv::new();
    env.repo
        .create_part(sample_part("KEEP-1"), None)
        .expect("should create part");

    let result = env.repo.delete_part(RecordId::generate());
    assert!(matches!(result, Err(RepositoryError::NotFound)));
    assert_eq!(env.repo.list_parts().expect("should list").len(), 1);
}

#[test]
fn updating_a_missing_id_fails_with_not_found() {
    let env = common::TestEnv::new();
    let result = env
        .repo
        .update_part(RecordId::generate(), OemPartPatch::default(), None);
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn corrupted_slot_surfaces_as_an_error_not_an_empty_collection() {
    let env = common::TestEnv::new();
    env.repo
        .create_part(sample_part("20700AE01A"), None)
        .expect("should create part");

    fs::write(env.config.data_dir.join("oem-parts.json"), "{ not json").expect("should clobber");
    let result = env.repo.list_parts();
    assert!(matches!(result, Err(RepositoryError::Corrupted(_))));
}

#[test]
fn concurrent_inserts_are_not_lost() {
    let env = common::TestEnv::new();
    const WRITERS: usize = 8;

    thread::scope(|scope| {
        for i in 0..WRITERS {
            let repo = env.repo.clone();
            scope.spawn(move || {
                repo.create_part(sample_part(&format!("PN-{i}")), None)
                    .expect("should create part");
            });
        }
    });

    assert_eq!(env.repo.list_parts().expect("should list").len(), WRITERS);
}

#[test]
fn wheels_persist_in_the_legacy_flat_layout() {
    let env = common::TestEnv::new();
    let created = env
        .repo
        .create_wheel(
            NewWheel {
                year: "2024".into(),
                make: "Subaru".into(),
                model: "Outback".into(),
                price: Price::parse("120.50", "price").unwrap(),
                ..NewWheel::default()
            },
            Some("tester"),
        )
        .expect("should create wheel");

    let raw = fs::read_to_string(env.config.data_dir.join("wheels.json")).expect("should read");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["id"], created.id.to_string().as_str());
    assert_eq!(row["status"], "Available");
    assert_eq!(row["condition"], "Good");
    assert_eq!(row["category"], "UNKNOWN");
    assert_eq!(row["price"], "120.50");
    assert_eq!(row["createdBy"], "tester");
    // Sale columns stay absent until the wheel is sold.
    assert!(row.get("soldPrice").is_none());

    let listed = env.repo.list_wheels().expect("should list wheels");
    assert_eq!(listed, vec![created]);
}
