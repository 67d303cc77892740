//! Test catalog and dispatch logic without TUI

use katha_core::{sample_records, Catalog, Dispatcher};
use katha_core::testing::RecordingNavigator;

fn main() {
    println!("=== Testing Dispatch Logic ===\n");

    // Test catalog validation and ordering
    test_catalog();

    // Test record-to-path dispatch
    test_dispatch();

    // Test route collision reporting
    test_collisions();

    println!("\n=== Tests complete! ===");
}

fn test_catalog() {
    println!("1. Testing catalog validation...");

    let catalog = Catalog::new(sample_records()).expect("sample catalog is valid");
    println!("   OK - {} records accepted", catalog.len());

    let mut broken = sample_records();
    broken[2].route = String::new();
    let rejected = Catalog::new(broken).is_err();
    let status = if rejected { "OK" } else { "FAIL" };
    println!("   {status} - empty route rejects the whole catalog");

    let mut spaced = sample_records();
    spaced[0].route = "whispering fort".to_string();
    let rejected = Catalog::new(spaced).is_err();
    let status = if rejected { "OK" } else { "FAIL" };
    println!("   {status} - route with a space rejects the whole catalog");
}

fn test_dispatch() {
    println!("\n2. Testing selection dispatch...");

    let catalog = Catalog::new(sample_records()).expect("sample catalog is valid");
    let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

    for record in catalog.records() {
        dispatcher
            .dispatch(&catalog, record)
            .expect("catalog entries always dispatch");
    }

    println!("   Dispatched every card:");
    for (record, path) in catalog.records().iter().zip(dispatcher.navigator().paths()) {
        println!("      {:28} {path}", record.name);
    }

    let calls = dispatcher.navigator().call_count();
    let status = if calls == catalog.len() { "OK" } else { "FAIL" };
    println!("   {status} - one navigation per dispatch ({calls} calls)");

    let stranger = katha_core::StoryRecord::new("Ghost", "not listed", "ghost", "👻", "Mystery");
    let refused = dispatcher.dispatch(&catalog, &stranger).is_err();
    let status = if refused { "OK" } else { "FAIL" };
    println!("   {status} - unlisted record refused, navigation suppressed");
}

fn test_collisions() {
    println!("\n3. Testing route collision report...");

    let catalog = Catalog::new(sample_records()).expect("sample catalog is valid");
    let collisions = catalog.route_collisions();

    for collision in &collisions {
        println!(
            "   /{} is backed by: {}",
            collision.route,
            collision.names.join(", ")
        );
    }

    let status = if collisions.len() == 2 { "OK" } else { "FAIL" };
    println!("   {status} - sample catalog reports 2 shared routes");
}
