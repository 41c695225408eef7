use std::fs;

use spp_inventory::domain::wheel::WheelStatus;
use spp_inventory::forms::wheels::{AddWheelForm, MarkSoldForm, UpdateWheelForm};
use spp_inventory::repository::WheelReader;
use spp_inventory::services::images::ImageUpload;
use spp_inventory::services::{ServiceError, import, users, wheels};
use spp_inventory::forms::users::AddUserForm;

mod common;

fn outback_form() -> AddWheelForm {
    AddWheelForm {
        year: "2024".into(),
        make: "Subaru".into(),
        model: "Outback".into(),
        size: Some("18x7.5".into()),
        bolt_pattern: Some("5x114.3".into()),
        price: Some("250".into()),
        category: Some("OEM".into()),
        ..AddWheelForm::default()
    }
}

fn jpeg(name: &str) -> ImageUpload {
    ImageUpload {
        file_name: name.to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

#[test]
fn created_wheel_gets_the_documented_sku_shape() {
    let env = common::TestEnv::new();
    let wheel = wheels::create_wheel(outback_form(), vec![], &common::admin(), &env.repo, &env.images)
        .expect("should create wheel");

    let (prefix, suffix) = wheel.sku.rsplit_once('-').expect("sku has a suffix");
    assert_eq!(prefix, "SPP-2024SUBOUT-187.5-5114.3");
    assert_eq!(suffix.len(), 4);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn mutations_require_the_admin_role() {
    let env = common::TestEnv::new();
    let result = wheels::create_wheel(
        outback_form(),
        vec![],
        &common::viewer(),
        &env.repo,
        &env.images,
    );
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[test]
fn mark_sold_flips_status_and_sale_fields_together() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(outback_form(), vec![], &admin, &env.repo, &env.images)
        .expect("should create wheel");

    wheels::mark_wheel_sold(
        &wheel.id.to_string(),
        MarkSoldForm {
            sold_price: Some("100".into()),
            sold_to: Some("Walk-in customer".into()),
            ..MarkSoldForm::default()
        },
        &admin,
        &env.repo,
    )
    .expect("should mark sold");

    // Re-read straight from disk: status and every sale field must have
    // changed together.
    let raw = fs::read_to_string(env.config.data_dir.join("wheels.json")).expect("should read");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(rows[0]["status"], "Sold");
    assert_eq!(rows[0]["soldPrice"], "100");
    assert_eq!(rows[0]["soldTo"], "Walk-in customer");
    assert!(rows[0]["soldAt"].is_string());

    let reread = env
        .repo
        .get_wheel_by_id(wheel.id)
        .expect("should read")
        .expect("wheel exists");
    match reread.status {
        WheelStatus::Sold(sale) => {
            assert_eq!(sale.price.to_string(), "100");
            assert_eq!(sale.to.as_deref(), Some("Walk-in customer"));
        }
        other => panic!("expected Sold, got {other:?}"),
    }
}

#[test]
fn mark_sold_without_a_price_is_a_validation_error() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(outback_form(), vec![], &admin, &env.repo, &env.images)
        .expect("should create wheel");

    let result = wheels::mark_wheel_sold(
        &wheel.id.to_string(),
        MarkSoldForm::default(),
        &admin,
        &env.repo,
    );
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[test]
fn mark_sold_on_a_missing_wheel_is_not_found() {
    let env = common::TestEnv::new();
    let result = wheels::mark_wheel_sold(
        &uuid::Uuid::new_v4().to_string(),
        MarkSoldForm::default(),
        &common::admin(),
        &env.repo,
    );
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[test]
fn update_appends_images_instead_of_replacing() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(
        outback_form(),
        vec![jpeg("front.jpg")],
        &admin,
        &env.repo,
        &env.images,
    )
    .expect("should create wheel");
    assert_eq!(wheel.images.len(), 1);

    let updated = wheels::update_wheel(
        &wheel.id.to_string(),
        UpdateWheelForm {
            price: Some("275".into()),
            ..UpdateWheelForm::default()
        },
        vec![jpeg("back.jpg")],
        &admin,
        &env.repo,
        &env.images,
    )
    .expect("should update wheel");

    assert_eq!(updated.price.to_string(), "275");
    assert_eq!(updated.images.len(), 2);
    assert_eq!(updated.images[0], wheel.images[0]);
}

#[test]
fn deleting_a_wheel_cascades_to_its_blobs() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(
        outback_form(),
        vec![jpeg("a.jpg"), jpeg("b.jpg"), jpeg("c.jpg")],
        &admin,
        &env.repo,
        &env.images,
    )
    .expect("should create wheel");

    // One blob already missing must not block the deletion of the rest.
    fs::remove_file(env.config.uploads_dir.join(wheel.images[1].file_name()))
        .expect("should remove blob");

    wheels::delete_wheel(&wheel.id.to_string(), &admin, &env.repo, &env.images)
        .expect("should delete wheel");

    assert!(env.repo.list_wheels().expect("should list").is_empty());
    let leftover = fs::read_dir(&env.config.uploads_dir).expect("should read dir").count();
    assert_eq!(leftover, 0);
}

#[test]
fn detach_rejects_references_outside_the_uploads_root() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(outback_form(), vec![], &admin, &env.repo, &env.images)
        .expect("should create wheel");

    let result = wheels::detach_wheel_image(
        &wheel.id.to_string(),
        "/uploads/../../etc/passwd",
        &admin,
        &env.repo,
        &env.images,
    );
    assert!(matches!(result, Err(ServiceError::InvalidPath)));
}

#[test]
fn detach_removes_the_reference_and_the_blob() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let wheel = wheels::create_wheel(
        outback_form(),
        vec![jpeg("front.jpg")],
        &admin,
        &env.repo,
        &env.images,
    )
    .expect("should create wheel");
    let image = wheel.images[0].clone();

    let updated = wheels::detach_wheel_image(
        &wheel.id.to_string(),
        image.as_str(),
        &admin,
        &env.repo,
        &env.images,
    )
    .expect("should detach image");

    assert!(updated.images.is_empty());
    assert!(!env.config.uploads_dir.join(image.file_name()).exists());

    // Detaching the same reference again: the wheel exists but the
    // reference does not.
    let result = wheels::detach_wheel_image(
        &wheel.id.to_string(),
        image.as_str(),
        &admin,
        &env.repo,
        &env.images,
    );
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[test]
fn import_keeps_valid_rows_and_reports_bad_ones() {
    let env = common::TestEnv::new();
    let csv = "\
sku,year,make,model,size,boltPattern,price,category
,2024,Subaru,Outback,18x7.5,5x114.3,120,OEM
WRX-01,2022,Subaru,WRX,18x8.5,5x114.3,300,AFTERMARKET
,,,,17x7,5x100,not-a-price,OEM
";
    let report = import::import_wheels(csv.as_bytes(), &common::admin(), &env.repo)
        .expect("import should run");

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.imported, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].row_number, 4);

    let wheels = env.repo.list_wheels().expect("should list");
    assert_eq!(wheels.len(), 2);
    assert!(wheels.iter().any(|w| w.sku == "WRX-01"));
}

#[test]
fn duplicate_usernames_are_rejected() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    let form = || AddUserForm {
        username: "clerk".into(),
        password: "hunter2hunter2".into(),
        role: "admin".into(),
    };

    users::create_user(form(), &admin, &env.repo).expect("first create should work");
    let result = users::create_user(form(), &admin, &env.repo);
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[test]
fn authenticate_checks_the_stored_hash() {
    let env = common::TestEnv::new();
    let admin = common::admin();
    users::create_user(
        AddUserForm {
            username: "clerk".into(),
            password: "hunter2hunter2".into(),
            role: "admin".into(),
        },
        &admin,
        &env.repo,
    )
    .expect("should create user");

    // The stored record carries a hash, never the clear-text password.
    let raw = fs::read_to_string(env.config.data_dir.join("users.json")).expect("should read");
    assert!(!raw.contains("hunter2hunter2"));

    let principal =
        users::authenticate("clerk", "hunter2hunter2", &env.repo).expect("should authenticate");
    assert_eq!(principal.username, "clerk");

    let result = users::authenticate("clerk", "wrong-password", &env.repo);
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}
