//! Application state container
//!
//! `AppState` is the single root owner of every live snapshot: users,
//! restaurants, polls, and the order ledger of the currently selected
//! restaurant. Views read snapshots; user actions go through the handler
//! methods below, which compute the next full document and push it through
//! the gateway. Local state is only updated when the store echoes the
//! write back through the subscription, so the externally persisted value
//! stays the sole source of truth.

use std::sync::Arc;

use chrono::Timelike;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use shared::models::{MenuItem, Poll, Restaurant, RestaurantOrder, User};
use shared::{AppError, AppResult};

use crate::config::Config;
use crate::orders::actions::{
    AddItem, ClearAll, ClearUser, LockOrder, RemoveItem, SetDeliveryFee, SetNote,
};
use crate::orders::OrderSummary;
use crate::polls::{self, CreatePoll};
use crate::session::{AdminSession, SessionError};
use crate::sync::{Collection, DocId, SubscribeTarget, SyncGateway};

/// Live snapshots, updated only from subscription echoes
#[derive(Debug, Default)]
struct Snapshots {
    /// Pickable users; admin-role accounts are filtered out
    users: Vec<User>,
    restaurants: Vec<Restaurant>,
    /// Kept sorted newest-first
    polls: Vec<Poll>,
    current_user: Option<User>,
    selected_restaurant: Option<String>,
    order: Option<RestaurantOrder>,
}

/// Root application state
pub struct AppState {
    gateway: Arc<dyn SyncGateway>,
    snapshots: Arc<RwLock<Snapshots>>,
    session: std::sync::Mutex<AdminSession>,
    shutdown: CancellationToken,
    /// Token of the per-restaurant order subscription, if one is open
    order_sub: std::sync::Mutex<Option<CancellationToken>>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn SyncGateway>, config: &Config) -> Self {
        Self {
            gateway,
            snapshots: Arc::new(RwLock::new(Snapshots::default())),
            session: std::sync::Mutex::new(AdminSession::new(config)),
            shutdown: CancellationToken::new(),
            order_sub: std::sync::Mutex::new(None),
        }
    }

    /// Open the three collection subscriptions. Runs until [`Self::stop`].
    pub async fn start(&self) -> AppResult<()> {
        self.spawn_users_task().await?;
        self.spawn_restaurants_task().await?;
        self.spawn_polls_task().await?;
        Ok(())
    }

    /// Tear down every subscription this state owns.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    // ========== Snapshot accessors ==========

    pub async fn users(&self) -> Vec<User> {
        self.snapshots.read().await.users.clone()
    }

    pub async fn restaurants(&self) -> Vec<Restaurant> {
        self.snapshots.read().await.restaurants.clone()
    }

    pub async fn polls(&self) -> Vec<Poll> {
        self.snapshots.read().await.polls.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.snapshots.read().await.current_user.clone()
    }

    /// The live ledger for the selected restaurant, empty until the first
    /// echo arrives.
    pub async fn order(&self) -> Option<RestaurantOrder> {
        self.snapshots.read().await.order.clone()
    }

    pub async fn set_current_user(&self, user_id: &str) -> AppResult<()> {
        let mut snaps = self.snapshots.write().await;
        let user = snaps
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("user"))?;
        snaps.current_user = Some(user);
        Ok(())
    }

    // ========== Admin session ==========

    pub fn admin_login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        self.session.lock().expect("session lock").login(username, password)
    }

    pub fn admin_logout(&self) {
        self.session.lock().expect("session lock").logout();
    }

    pub fn is_admin(&self) -> bool {
        self.session.lock().expect("session lock").is_admin()
    }

    // ========== Restaurant selection ==========

    /// Select a restaurant and open the live subscription on its order
    /// document, replacing any previous selection.
    pub async fn select_restaurant(&self, restaurant_id: &str) -> AppResult<()> {
        self.close_order_subscription();

        {
            let mut snaps = self.snapshots.write().await;
            snaps.selected_restaurant = Some(restaurant_id.to_string());
            snaps.order = None;
        }

        let target = SubscribeTarget::Document(DocId::new(Collection::Orders, restaurant_id));
        let mut sub = self.gateway.subscribe(target).await?;
        let token = self.shutdown.child_token();
        *self.order_sub.lock().expect("order_sub lock") = Some(token.clone());

        let snapshots = self.snapshots.clone();
        let restaurant_id = restaurant_id.to_string();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    // Checked first so a cancelled subscription never
                    // delivers another snapshot.
                    biased;
                    _ = token.cancelled() => break,
                    value = sub.next() => {
                        let Some(value) = value else { break };
                        let order = if value.is_null() {
                            RestaurantOrder::empty(restaurant_id.clone())
                        } else {
                            match serde_json::from_value(value) {
                                Ok(order) => order,
                                Err(err) => {
                                    warn!(%err, "discarding malformed order document");
                                    continue;
                                }
                            }
                        };
                        let mut snaps = snapshots.write().await;
                        // The selection may have moved on while this
                        // snapshot was in flight; a stale one must not
                        // overwrite the reset (or another restaurant's
                        // feed).
                        if snaps.selected_restaurant.as_deref() == Some(restaurant_id.as_str()) {
                            snaps.order = Some(order);
                        }
                    }
                }
            }
            debug!("order subscription closed");
        });

        Ok(())
    }

    /// Drop the selection and its subscription, resetting the local order
    /// snapshot.
    pub async fn deselect_restaurant(&self) {
        self.close_order_subscription();
        let mut snaps = self.snapshots.write().await;
        snaps.selected_restaurant = None;
        snaps.order = None;
    }

    fn close_order_subscription(&self) {
        if let Some(token) = self.order_sub.lock().expect("order_sub lock").take() {
            token.cancel();
        }
    }

    // ========== Order handlers ==========

    /// Add one unit of `item` for the current user.
    pub async fn add_item(&self, item: &MenuItem) -> AppResult<()> {
        let user = self
            .current_user()
            .await
            .ok_or_else(|| AppError::validation("pick an employee first"))?;
        let order = self.current_order().await?;
        let next = AddItem {
            item: item.clone(),
            user_id: user.id,
            user_name: user.name,
        }
        .apply(&order)?;
        self.write_order(next).await
    }

    pub async fn remove_item(&self, item_id: &str, user_id: &str) -> AppResult<()> {
        let order = self.current_order().await?;
        let next = RemoveItem {
            item_id: item_id.to_string(),
            user_id: user_id.to_string(),
        }
        .apply(&order);
        self.write_order(next).await
    }

    pub async fn set_note(&self, item_id: &str, user_id: &str, text: &str) -> AppResult<()> {
        let order = self.current_order().await?;
        let next = SetNote {
            item_id: item_id.to_string(),
            user_id: user_id.to_string(),
            text: text.to_string(),
        }
        .apply(&order);
        self.write_order(next).await
    }

    /// Remove every line one user holds. Refused while the order is
    /// locked: the ledger transition itself would allow it, but this
    /// caller enforces the lock for everything short of a full reset.
    pub async fn clear_user(&self, user_id: &str) -> AppResult<()> {
        let order = self.current_order().await?;
        if order.is_locked {
            return Err(AppError::validation("order is locked"));
        }
        let next = ClearUser {
            user_id: user_id.to_string(),
        }
        .apply(&order);
        self.write_order(next).await
    }

    pub async fn set_delivery_fee(&self, fee: i64) -> AppResult<()> {
        let order = self.current_order().await?;
        let next = SetDeliveryFee { fee }.apply(&order);
        self.write_order(next).await
    }

    /// Finalize the group order; nobody can edit until the next
    /// [`Self::clear_all`].
    pub async fn lock_order(&self) -> AppResult<()> {
        let order = self.current_order().await?;
        let next = LockOrder.apply(&order);
        self.write_order(next).await
    }

    /// Reset the ledger for the next group order. Allowed even while
    /// locked; this is the sole way to unlock.
    pub async fn clear_all(&self) -> AppResult<()> {
        let order = self.current_order().await?;
        let next = ClearAll.apply(&order);
        self.write_order(next).await
    }

    /// Aggregated view of an order snapshot (free function wrapper so
    /// callers can aggregate any snapshot they hold).
    pub fn summarize(order: &RestaurantOrder) -> OrderSummary<'_> {
        OrderSummary::new(order)
    }

    async fn current_order(&self) -> AppResult<RestaurantOrder> {
        let snaps = self.snapshots.read().await;
        let selected = snaps
            .selected_restaurant
            .clone()
            .ok_or_else(|| AppError::validation("no restaurant selected"))?;
        // Until the first echo arrives the ledger is implicitly empty; the
        // document is created on first write.
        Ok(snaps
            .order
            .clone()
            .unwrap_or_else(|| RestaurantOrder::empty(selected)))
    }

    async fn write_order(&self, order: RestaurantOrder) -> AppResult<()> {
        let id = DocId::new(Collection::Orders, order.restaurant_id.clone());
        let value = serde_json::to_value(&order).map_err(|e| AppError::internal(e.to_string()))?;
        self.gateway.write_document(&id, value, false).await?;
        Ok(())
    }

    // ========== Poll handlers ==========

    /// Create a poll authored by the current user.
    pub async fn create_poll(&self, question: &str, options: Vec<String>) -> AppResult<Poll> {
        let creator = self
            .current_user()
            .await
            .ok_or_else(|| AppError::validation("pick an employee first"))?;
        let poll = CreatePoll {
            question: question.to_string(),
            options,
        }
        .build(&creator)?;

        let id = DocId::new(Collection::Polls, poll.id.clone());
        let value = serde_json::to_value(&poll).map_err(|e| AppError::internal(e.to_string()))?;
        self.gateway.create_or_replace_document(&id, value).await?;
        Ok(poll)
    }

    /// Toggle the current user's vote. A poll another client already
    /// deleted is a silent no-op.
    pub async fn toggle_vote(&self, poll_id: &str, option_id: &str) -> AppResult<()> {
        let user = self
            .current_user()
            .await
            .ok_or_else(|| AppError::validation("pick an employee first"))?;
        let Some(poll) = self
            .snapshots
            .read()
            .await
            .polls
            .iter()
            .find(|p| p.id == poll_id)
            .cloned()
        else {
            return Ok(());
        };

        let next = polls::toggle_vote(&poll, option_id, &user.id);
        // Patch only the options field, the way the store's documents have
        // always been voted on; concurrent edits to other fields survive.
        let patch = serde_json::json!({
            "options": serde_json::to_value(&next.options)
                .map_err(|e| AppError::internal(e.to_string()))?,
        });
        let id = DocId::new(Collection::Polls, poll_id);
        self.gateway.write_document(&id, patch, true).await?;
        Ok(())
    }

    /// Delete a poll. Deliberately no ownership check: any user may delete
    /// any poll in this trusted-office tool.
    pub async fn delete_poll(&self, poll_id: &str) -> AppResult<()> {
        let id = DocId::new(Collection::Polls, poll_id);
        self.gateway.delete_document(&id).await?;
        Ok(())
    }

    // ========== Admin CRUD ==========

    pub async fn add_restaurant(
        &self,
        name: &str,
        image: &str,
        cuisine: &str,
    ) -> AppResult<Restaurant> {
        if name.trim().is_empty() {
            return Err(AppError::validation("restaurant name must not be empty"));
        }
        let restaurant = Restaurant::new(name, image, cuisine);
        self.write_restaurant(&restaurant).await?;
        Ok(restaurant)
    }

    pub async fn update_restaurant(&self, restaurant: &Restaurant) -> AppResult<()> {
        self.write_restaurant(restaurant).await
    }

    pub async fn rename_restaurant(&self, restaurant_id: &str, name: &str) -> AppResult<()> {
        let mut restaurant = self.restaurant_by_id(restaurant_id).await?;
        restaurant.name = name.to_string();
        self.write_restaurant(&restaurant).await
    }

    pub async fn delete_restaurant(&self, restaurant_id: &str) -> AppResult<()> {
        self.gateway
            .delete_document(&DocId::new(Collection::Restaurants, restaurant_id))
            .await?;
        // The orphaned order document would otherwise keep its lines
        // forever.
        self.gateway
            .delete_document(&DocId::new(Collection::Orders, restaurant_id))
            .await?;
        Ok(())
    }

    /// Append a menu item; edits to existing lines are out of reach by
    /// design (lines hold denormalized snapshots).
    pub async fn add_menu_item(
        &self,
        restaurant_id: &str,
        name: &str,
        price: i64,
        category: Option<String>,
    ) -> AppResult<MenuItem> {
        if name.trim().is_empty() {
            return Err(AppError::validation("menu item name must not be empty"));
        }
        let item = MenuItem::new(name, price, category);
        let mut restaurant = self.restaurant_by_id(restaurant_id).await?;
        restaurant.menu.push(item.clone());
        self.write_restaurant(&restaurant).await?;
        Ok(item)
    }

    pub async fn update_menu_item(&self, restaurant_id: &str, item: MenuItem) -> AppResult<()> {
        let mut restaurant = self.restaurant_by_id(restaurant_id).await?;
        match restaurant.menu.iter_mut().find(|m| m.id == item.id) {
            Some(existing) => *existing = item,
            None => return Err(AppError::not_found("menu item")),
        }
        self.write_restaurant(&restaurant).await
    }

    pub async fn remove_menu_item(&self, restaurant_id: &str, item_id: &str) -> AppResult<()> {
        let mut restaurant = self.restaurant_by_id(restaurant_id).await?;
        restaurant.menu.retain(|m| m.id != item_id);
        self.write_restaurant(&restaurant).await
    }

    pub async fn add_user(&self, name: &str) -> AppResult<User> {
        if name.trim().is_empty() {
            return Err(AppError::validation("user name must not be empty"));
        }
        let user = User::new_employee(name);
        let id = DocId::new(Collection::Users, user.id.clone());
        let value = serde_json::to_value(&user).map_err(|e| AppError::internal(e.to_string()))?;
        self.gateway.create_or_replace_document(&id, value).await?;
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        self.gateway
            .delete_document(&DocId::new(Collection::Users, user_id))
            .await?;
        Ok(())
    }

    async fn restaurant_by_id(&self, restaurant_id: &str) -> AppResult<Restaurant> {
        self.snapshots
            .read()
            .await
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("restaurant"))
    }

    async fn write_restaurant(&self, restaurant: &Restaurant) -> AppResult<()> {
        let id = DocId::new(Collection::Restaurants, restaurant.id.clone());
        let value =
            serde_json::to_value(restaurant).map_err(|e| AppError::internal(e.to_string()))?;
        self.gateway.create_or_replace_document(&id, value).await?;
        Ok(())
    }

    // ========== Subscription tasks ==========

    async fn spawn_users_task(&self) -> AppResult<()> {
        let mut sub = self
            .gateway
            .subscribe(SubscribeTarget::Collection(Collection::Users))
            .await?;
        let snapshots = self.snapshots.clone();
        let token = self.shutdown.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    value = sub.next() => {
                        let Some(value) = value else { break };
                        let all: Vec<User> = parse_list(value, "user");
                        let mut snaps = snapshots.write().await;
                        snaps.users = all.into_iter().filter(|u| !u.is_admin()).collect();
                        // Auto-pick the first employee, and drop a current
                        // user that no longer exists.
                        let still_there = snaps
                            .current_user
                            .as_ref()
                            .is_some_and(|cu| snaps.users.iter().any(|u| u.id == cu.id));
                        if !still_there {
                            snaps.current_user = snaps.users.first().cloned();
                        }
                    }
                }
            }
        });
        Ok(())
    }

    async fn spawn_restaurants_task(&self) -> AppResult<()> {
        let mut sub = self
            .gateway
            .subscribe(SubscribeTarget::Collection(Collection::Restaurants))
            .await?;
        let snapshots = self.snapshots.clone();
        let token = self.shutdown.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    value = sub.next() => {
                        let Some(value) = value else { break };
                        snapshots.write().await.restaurants = parse_list(value, "restaurant");
                    }
                }
            }
        });
        Ok(())
    }

    async fn spawn_polls_task(&self) -> AppResult<()> {
        let mut sub = self
            .gateway
            .subscribe(SubscribeTarget::Collection(Collection::Polls))
            .await?;
        let snapshots = self.snapshots.clone();
        let token = self.shutdown.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    value = sub.next() => {
                        let Some(value) = value else { break };
                        let mut polls: Vec<Poll> = parse_list(value, "poll");
                        polls::sort_newest_first(&mut polls);
                        snapshots.write().await.polls = polls;
                    }
                }
            }
        });
        Ok(())
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Time-based greeting: morning before 13:00 local, evening after
pub fn greeting() -> &'static str {
    greeting_for_hour(chrono::Local::now().hour())
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 13 { "good morning" } else { "good evening" }
}

/// Parse a collection snapshot, skipping malformed documents instead of
/// failing the whole update.
fn parse_list<T: DeserializeOwned>(value: Value, kind: &str) -> Vec<T> {
    let Value::Array(entries) = value else {
        warn!(kind, "expected array snapshot");
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(kind, %err, "skipping malformed document");
                None
            }
        })
        .collect()
}
