//! Office Lunch Example - full group-order walkthrough in one process
//!
//! Two simulated clients share an in-memory gateway and coordinate one
//! group breakfast:
//! 1. Admin seeds a restaurant with a small menu and two employees
//! 2. Both clients subscribe and add their own lines
//! 3. The per-user and per-item totals are printed, fee split included
//! 4. A poll decides tomorrow's restaurant
//!
//! Run: cargo run -p fatoor-client --example office_lunch

use std::sync::Arc;
use std::time::Duration;

use fatoor_client::{greeting, AppState, Config, MemoryGateway, SyncGateway};

async fn settle() {
    // Give the subscription echoes a moment to land.
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fatoor_client::init_logger();

    println!("=== Fatoor Office Lunch Example ===");
    println!("{}!\n", greeting());

    // === 1. One shared store, two clients ===
    let config = Config::from_env();
    let gateway = Arc::new(MemoryGateway::with_capacity(config.channel_capacity));

    let sami = Arc::new(AppState::new(gateway.clone() as Arc<dyn SyncGateway>, &config));
    let lina = Arc::new(AppState::new(gateway.clone() as Arc<dyn SyncGateway>, &config));
    sami.start().await?;
    lina.start().await?;

    // === 2. Admin seeds the office ===
    sami.admin_login(&config.admin_username, &config.admin_password)?;
    let rest = sami
        .add_restaurant("Shamiyat", "https://img.example/shamiyat.jpg", "Levantine")
        .await?;
    settle().await;
    // Menu edits read the local restaurant snapshot, so each write has to
    // echo back before the next one.
    let burger = sami.add_menu_item(&rest.id, "Burger", 500, Some("Mains".into())).await?;
    settle().await;
    let fries = sami.add_menu_item(&rest.id, "Fries", 200, Some("Sides".into())).await?;
    sami.add_user("Sami").await?;
    lina.add_user("Lina").await?;
    settle().await;

    // === 3. Everyone orders ===
    sami.select_restaurant(&rest.id).await?;
    lina.select_restaurant(&rest.id).await?;

    let users = sami.users().await;
    let sami_id = users.iter().find(|u| u.name == "Sami").expect("seeded").id.clone();
    let lina_id = users.iter().find(|u| u.name == "Lina").expect("seeded").id.clone();
    sami.set_current_user(&sami_id).await?;
    lina.set_current_user(&lina_id).await?;

    sami.add_item(&burger).await?;
    settle().await;
    sami.add_item(&burger).await?;
    settle().await;
    lina.add_item(&fries).await?;
    settle().await;
    lina.set_note(&fries.id, &lina_id, "extra ketchup").await?;
    settle().await;
    lina.set_delivery_fee(400).await?;
    settle().await;

    // === 4. Review the shared order ===
    let order = sami.order().await.expect("order snapshot");
    let summary = AppState::summarize(&order);

    println!("--- Per employee ---");
    for user in summary.by_user() {
        println!(
            "{}: food {} + delivery {:.0} = {:.0}",
            user.name,
            user.food_total,
            summary.delivery_split(),
            summary.user_total(&user),
        );
    }

    println!("--- Call-in list ---");
    for item in summary.by_item() {
        print!("{} x{} @ {}", item.name, item.count, item.price);
        for note in &item.notes {
            print!("  [{note}]");
        }
        println!();
    }
    println!("grand total: {}\n", summary.grand_total());

    // === 5. Lock, then reset for tomorrow ===
    sami.lock_order().await?;
    settle().await;
    println!("order locked: {}", sami.order().await.unwrap().is_locked);
    sami.clear_all().await?;
    settle().await;
    println!("after reset, lines: {}\n", sami.order().await.unwrap().items.len());

    // === 6. Tomorrow's poll ===
    let poll = sami
        .create_poll("Tomorrow?", vec!["Shamiyat again".into(), "Abu Kamal".into()])
        .await?;
    settle().await;
    let option = lina.polls().await[0].options[1].clone();
    lina.toggle_vote(&poll.id, &option.id).await?;
    settle().await;

    for poll in sami.polls().await {
        println!("poll: {}", poll.question);
        for opt in &poll.options {
            println!(
                "  {} - {} vote(s), {}%",
                opt.text,
                opt.votes,
                fatoor_client::polls::percentage(opt.votes, poll.total_votes()),
            );
        }
    }

    sami.stop();
    lina.stop();
    Ok(())
}
