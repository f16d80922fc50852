//! Integration tests for the protective-armor path

use gear_warden::agent::Agent;
use gear_warden::armor::{overall_protection, pick_best_armor, request_armor_equip, ArmorRequest, UpgradeLoop};
use gear_warden::core::config::config;
use gear_warden::core::types::{DefId, Gender, Vec2};
use gear_warden::defs::{ApparelDef, BodySlot, DefDatabase};
use gear_warden::host::testing::{StubSink, StubWorld};
use gear_warden::items::Item;
use gear_warden::scoring::{protection_score_gain, worn_protection_scores};
use gear_warden::tasks::TaskKind;

fn armor_def(id: u32, name: &str, sharp: f32, blunt: f32, slots: Vec<BodySlot>) -> ApparelDef {
    ApparelDef::new(DefId(id), name)
        .with_slots(slots)
        .with_armor(sharp, blunt)
}

/// Test 1: bare agent, one reachable full-durability armor piece -> picked
#[test]
fn test_bare_agent_finds_armor() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "flak vest", 0.8, 0.3, vec![BodySlot::Torso]));

    let agent = Agent::new(Gender::Male);
    let mut world = StubWorld::new();
    let vest = Item::new(DefId(1)).at(Vec2::new(3.0, 3.0));
    let vest_id = vest.id;
    world.place(vest);

    let best = pick_best_armor(&defs, &world, &agent).expect("armor");
    assert_eq!(best.id, vest_id);
}

/// Test 2: hard-blocked candidates lose to any unblocked one
#[test]
fn test_hard_block_dominance() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "shirt", 0.1, 0.05, vec![BodySlot::Torso]));
    // massively better raw score, but conflicts with the locked shirt
    defs.add_apparel(armor_def(2, "marine armor", 2.0, 1.0, vec![BodySlot::Torso]));
    defs.add_apparel(armor_def(3, "cap", 0.2, 0.1, vec![BodySlot::Head]));

    let mut agent = Agent::new(Gender::Male);
    let shirt = Item::new(DefId(1));
    agent.outfit.lock(shirt.id);
    agent.worn.push(shirt);

    let mut world = StubWorld::new();
    world.place(Item::new(DefId(2)).at(Vec2::new(1.0, 0.0)));
    let cap = Item::new(DefId(3)).at(Vec2::new(5.0, 0.0));
    let cap_id = cap.id;
    world.place(cap);

    // confirm the marine armor really is hard-blocked
    let worn_scores = worn_protection_scores(&defs, &agent);
    let blocked = Item::new(DefId(2));
    let blocked_def = defs.apparel(DefId(2)).unwrap();
    let gain = protection_score_gain(&defs, &agent, &blocked, blocked_def, &worn_scores);
    assert_eq!(gain, config().hard_block_score);

    let best = pick_best_armor(&defs, &world, &agent).expect("armor");
    assert_eq!(best.id, cap_id);
}

/// Test 3: a marginal upgrade below the gain threshold is not worth moving for
#[test]
fn test_gain_threshold_filters_churn() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "vest a", 0.8, 0.3, vec![BodySlot::Torso]));
    defs.add_apparel(armor_def(2, "vest b", 0.8, 0.3, vec![BodySlot::Torso]));

    let mut agent = Agent::new(Gender::Male);
    agent.worn.push(Item::new(DefId(1)));

    let mut world = StubWorld::new();
    world.place(Item::new(DefId(2)).at(Vec2::new(1.0, 0.0)));

    // identical ratings: the swap nets zero gain
    assert!(pick_best_armor(&defs, &world, &agent).is_none());
}

/// Test 4: manual request queues an ordered equip task, or reports failure
#[test]
fn test_manual_request_outcomes() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "flak vest", 0.8, 0.3, vec![BodySlot::Torso]));

    let agent = Agent::new(Gender::Female).named("Rella");
    let mut world = StubWorld::new();
    let vest = Item::new(DefId(1)).at(Vec2::new(2.0, 2.0));
    let vest_id = vest.id;
    world.place(vest);

    let mut sink = StubSink::new();
    match request_armor_equip(&defs, &world, &mut sink, &agent) {
        ArmorRequest::Equipping(id) => assert_eq!(id, vest_id),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(sink.started.len(), 1);
    assert_eq!(sink.started[0].1.kind, TaskKind::EquipArmor);

    let empty_world = StubWorld::new();
    let mut sink = StubSink::new();
    match request_armor_equip(&defs, &empty_world, &mut sink, &agent) {
        ArmorRequest::NothingFound { message } => assert!(message.contains("Rella")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// Test 5: the upgrade chain walks through successive improvements and stops
#[test]
fn test_upgrade_chain_converges() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "helmet", 0.4, 0.2, vec![BodySlot::Head]));
    defs.add_apparel(armor_def(2, "vest", 0.9, 0.4, vec![BodySlot::Torso]));

    let mut agent = Agent::new(Gender::Male);
    let mut world = StubWorld::new();
    world.place(Item::new(DefId(1)).at(Vec2::new(1.0, 0.0)));
    world.place(Item::new(DefId(2)).at(Vec2::new(2.0, 0.0)));

    let mut sink = StubSink::new();
    let mut chain = UpgradeLoop::new();

    // simulate the host: each issued equip completes and moves the item
    // from the map onto the agent
    let mut equipped = 0;
    while let Some(item_id) = chain.on_wear_complete(&defs, &world, &mut sink, &agent) {
        let mut found = None;
        for items in world.placed.values_mut() {
            if let Some(index) = items.iter().position(|item| item.id == item_id) {
                found = Some(items.remove(index));
                break;
            }
        }
        let mut item = found.expect("issued item exists on the map");
        item.position = None;
        agent.worn.push(item);
        equipped += 1;
        assert!(equipped <= 10, "chain failed to converge");
    }

    // both pieces end up worn, then the chain reports nothing better
    assert_eq!(equipped, 2);
    assert_eq!(agent.worn.len(), 2);
}

/// Test 6: overall protection reflects coverage and caps out
#[test]
fn test_overall_protection_scale() {
    let mut defs = DefDatabase::new();
    defs.add_apparel(armor_def(1, "vest", 1.0, 0.4, vec![BodySlot::Torso]));
    defs.add_apparel(armor_def(2, "helmet", 0.6, 0.2, vec![BodySlot::Head]));

    let mut agent = Agent::new(Gender::Male);
    let bare = overall_protection(&defs, &agent);
    assert_eq!(bare, 0.0);

    agent.worn.push(Item::new(DefId(1)));
    let vest_only = overall_protection(&defs, &agent);
    assert!(vest_only > bare);

    agent.worn.push(Item::new(DefId(2)));
    let both = overall_protection(&defs, &agent);
    assert!(both > vest_only);
    assert!(both <= 400.0);
}
