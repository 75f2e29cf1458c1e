//! Demo data loaded at startup in development environments.
//!
//! Each table is filled only while it is empty, so restarting against an
//! existing database leaves it untouched.

use rand::{rngs::StdRng, Rng, SeedableRng};
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::notifications::{dto::NotificationRequest, repo_types::KINDS};
use crate::orders::repo_types::{NewOrder, STATUSES};
use crate::products::dto::ProductRequest;
use crate::state::AppState;
use crate::users::{dto::UserRequest, repo_types::User};

const USERS: usize = 10;
const PRODUCTS: usize = 20;
const ORDERS: usize = 15;
const NOTIFICATIONS: usize = 25;

const FIRST_NAMES: [&str; 10] = [
    "Camila", "Matías", "Valentina", "Benjamín", "Josefa", "Tomás", "Isidora", "Vicente",
    "Antonia", "Martín",
];
const LAST_NAMES: [&str; 8] = [
    "González", "Muñoz", "Rojas", "Díaz", "Pérez", "Soto", "Contreras", "Silva",
];
const MAIL_DOMAINS: [&str; 3] = ["mail.cl", "correo.com", "ecomarket.cl"];

const CATEGORIES: [&str; 5] = ["Home", "Personal care", "Kitchen", "Garden", "Kids"];
const ADJECTIVES: [&str; 6] = ["Bamboo", "Recycled", "Organic", "Compostable", "Reusable", "Solar"];
const ITEMS: [&str; 7] = ["toothbrush", "tote bag", "soap bar", "lunch box", "lamp", "straw set", "notebook"];

const MESSAGES: [&str; 5] = [
    "Your order has been confirmed",
    "Your order is on its way",
    "New eco products available this week",
    "Your order was delivered",
    "Remember to rate your last purchase",
];

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Seeds every empty table with a fresh entropy-backed generator.
pub async fn seed_demo_data(st: &AppState) -> anyhow::Result<()> {
    let mut rng = StdRng::from_entropy();
    seed_with(st, &mut rng).await
}

pub async fn seed_with<R: Rng + Send>(st: &AppState, rng: &mut R) -> anyhow::Result<()> {
    seed_users(st, rng).await?;
    seed_products(st, rng).await?;

    let users = st.users.list().await?;
    seed_orders(st, rng, &users).await?;
    seed_notifications(st, rng, &users).await?;
    Ok(())
}

async fn seed_users<R: Rng + Send>(st: &AppState, rng: &mut R) -> anyhow::Result<()> {
    if !st.users.list().await?.is_empty() {
        info!("users table already populated; skipping demo users");
        return Ok(());
    }
    for i in 0..USERS {
        let first = pick(rng, &FIRST_NAMES);
        let last = pick(rng, &LAST_NAMES);
        let req = UserRequest {
            name: format!("{first} {last}"),
            email: format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                i + 1,
                pick(rng, &MAIL_DOMAINS)
            ),
            phone: Some(format!("+569{:08}", rng.gen_range(0..100_000_000u32))),
        };
        let user = st.users.insert(&req).await?;
        info!(user_id = user.id, name = %user.name, "demo user created");
    }
    Ok(())
}

async fn seed_products<R: Rng + Send>(st: &AppState, rng: &mut R) -> anyhow::Result<()> {
    if !st.products.list().await?.is_empty() {
        info!("products table already populated; skipping demo products");
        return Ok(());
    }
    for _ in 0..PRODUCTS {
        let name = format!("{} {}", pick(rng, &ADJECTIVES), pick(rng, &ITEMS));
        let req = ProductRequest {
            description: Some(format!("{name} made from sustainable materials.")),
            name,
            category: pick(rng, &CATEGORIES).to_string(),
            price: cents(rng.gen_range(1_000.0..100_000.0)),
            stock: rng.gen_range(1..100),
        };
        let product = st.products.insert(&req).await?;
        info!(product_id = product.id, price = product.price, "demo product created");
    }
    Ok(())
}

async fn seed_orders<R: Rng + Send>(
    st: &AppState,
    rng: &mut R,
    users: &[User],
) -> anyhow::Result<()> {
    if !st.orders.list().await?.is_empty() {
        info!("orders table already populated; skipping demo orders");
        return Ok(());
    }
    if users.is_empty() {
        warn!("no users available; skipping demo orders");
        return Ok(());
    }
    let now = OffsetDateTime::now_utc();
    for _ in 0..ORDERS {
        let user = &users[rng.gen_range(0..users.len())];
        let new = NewOrder {
            status: pick(rng, &STATUSES).to_string(),
            date: now - Duration::seconds(rng.gen_range(0..30 * 24 * 3600)),
            total: cents(rng.gen_range(5_000.0..500_000.0)),
            user_id: user.id,
        };
        let order = st.orders.insert(&new).await?;
        info!(order_id = order.id, status = %order.status, user_id = user.id, "demo order created");
    }
    Ok(())
}

async fn seed_notifications<R: Rng + Send>(
    st: &AppState,
    rng: &mut R,
    users: &[User],
) -> anyhow::Result<()> {
    if !st.notifications.list().await?.is_empty() {
        info!("notifications table already populated; skipping demo notifications");
        return Ok(());
    }
    if users.is_empty() {
        warn!("no users available; skipping demo notifications");
        return Ok(());
    }
    for _ in 0..NOTIFICATIONS {
        let user = &users[rng.gen_range(0..users.len())];
        let req = NotificationRequest {
            kind: pick(rng, &KINDS).to_string(),
            message: pick(rng, &MESSAGES).to_string(),
            user_id: user.id,
        };
        let notification = st.notifications.insert(&req).await?;
        info!(notification_id = notification.id, user_id = user.id, "demo notification created");
    }
    Ok(())
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
