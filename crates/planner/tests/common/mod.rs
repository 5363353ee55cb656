//! Stateful in-process mock of the MyWedding REST backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use mywedding_client::{ApiClient, ClientConfig, RetryPolicy};
use mywedding_planner::store::AuthUser;
use mywedding_planner::token::StaticToken;
use mywedding_planner::PlannerContext;

pub const TOKEN: &str = "test-token";
pub const USER_ID: &str = "u1";

/// Backend data plus a request log and per-route failure injection.
#[derive(Debug, Default)]
pub struct Backend {
    pub events: Vec<Value>,
    pub organizers: Vec<Value>,
    pub tasks: Vec<Value>,
    pub total_budget: f64,
    pub expenses: Vec<Value>,
    pub categories: Vec<Value>,
    pub activity: Vec<Value>,
    pub polls: Vec<Value>,
    pub conversations: Vec<Value>,
    pub messages: HashMap<String, Vec<Value>>,
    pub services: Vec<Value>,
    pub vendors: Vec<Value>,
    /// Route key -> (status, body) returned instead of the normal response.
    pub failures: HashMap<&'static str, (u16, Value)>,
    /// `"METHOD /path"` for every request received.
    pub calls: Vec<String>,
    pub next_id: u32,
}

impl Backend {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    pub fn fail(&mut self, route: &'static str, status: u16, body: Value) {
        self.failures.insert(route, (status, body));
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| c.as_str() == call).count()
    }

    fn log(&mut self, activity: &str) {
        let id = self.id("a");
        self.activity.insert(
            0,
            json!({
                "id": id,
                "itemType": "SystemLog",
                "content": activity,
                "userFirstName": "Test",
                "userLastName": "User",
                "createdAt": "2026-01-01T10:00:00Z"
            }),
        );
    }
}

pub type Shared = Arc<Mutex<Backend>>;

/// Record the call, check auth and failure injection.
fn enter(db: &Shared, headers: &HeaderMap, route: &'static str, call: String) -> Option<Response> {
    let mut db = db.lock().unwrap();
    db.calls.push(call);
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {TOKEN}");
    if !route.starts_with("public:") && auth != Some(expected.as_str()) {
        return Some((StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthorized"}))).into_response());
    }
    db.failures.get(route).map(|(status, body)| {
        (StatusCode::from_u16(*status).unwrap(), Json(body.clone())).into_response()
    })
}

macro_rules! guard {
    ($db:expr, $headers:expr, $route:expr, $($call:tt)+) => {
        if let Some(resp) = enter(&$db, &$headers, $route, format!($($call)+)) {
            return resp;
        }
    };
}

pub fn router(db: Shared) -> Router {
    Router::new()
        .route("/api/auth/sync-user", post(sync_user))
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", get(get_event))
        .route("/api/events/{id}/organizers", get(list_organizers).post(invite))
        .route("/api/invitations/accept", post(accept_invitation))
        .route("/api/events/{id}/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}/status", put(update_task_status))
        .route("/api/events/{id}/budget", get(budget_overview).put(set_budget))
        .route("/api/events/{id}/expenses", get(list_expenses).post(add_expense))
        .route("/api/budget-categories", get(list_categories))
        .route("/api/events/{id}/preferences", put(set_preferences))
        .route("/api/events/{id}/activity", get(list_activity))
        .route("/api/events/{id}/comments", post(post_comment))
        .route("/api/events/{id}/conversations", get(list_conversations))
        .route("/api/conversations/{id}/messages", get(list_messages).post(post_message))
        .route("/api/events/{id}/polls", get(list_polls))
        .route("/api/polls", post(create_poll))
        .route("/api/polls/{id}/vote", post(vote))
        .route("/api/vendors", get(list_vendors))
        .route("/api/vendors/{id}", get(get_vendor))
        .route("/api/bookings", post(create_booking))
        .route("/api/vendor/dashboard/services", get(list_services).post(create_service))
        .route(
            "/api/vendor/dashboard/services/{id}",
            put(update_service).delete(delete_service),
        )
        .with_state(db)
}

/// Start the mock backend and return a signed-in context pointing at it.
pub async fn setup(seed: Backend) -> (PlannerContext, Shared) {
    let (ctx, db) = setup_signed_out(seed).await;
    ctx.sign_in(
        AuthUser::new(USER_ID).with_display_name("Test User"),
        Arc::new(StaticToken::new(TOKEN)),
    )
    .await
    .expect("sign in");
    db.lock().unwrap().calls.clear();
    (ctx, db)
}

pub async fn setup_signed_out(seed: Backend) -> (PlannerContext, Shared) {
    let db: Shared = Arc::new(Mutex::new(seed));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(db.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = ClientConfig::new(format!("http://{addr}"));
    config.retry = RetryPolicy::none();
    let ctx = PlannerContext::new(ApiClient::new(&config).unwrap());
    (ctx, db)
}

pub fn event(id: &str, name: &str, date: &str) -> Value {
    json!({"id": id, "eventName": name, "eventDate": date})
}

pub fn task(id: &str, title: &str, status: &str) -> Value {
    json!({"id": id, "title": title, "status": status})
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn sync_user(State(db): State<Shared>, headers: HeaderMap) -> Response {
    guard!(db, headers, "sync_user", "POST /api/auth/sync-user");
    StatusCode::OK.into_response()
}

async fn list_events(State(db): State<Shared>, headers: HeaderMap) -> Response {
    guard!(db, headers, "list_events", "GET /api/events");
    Json(db.lock().unwrap().events.clone()).into_response()
}

async fn create_event(State(db): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    guard!(db, headers, "create_event", "POST /api/events");
    let mut db = db.lock().unwrap();
    let id = db.id("e");
    db.events.push(json!({
        "id": id,
        "eventName": body["eventName"],
        "eventDate": body["eventDate"],
    }));
    (StatusCode::CREATED, Json(json!({"eventId": id}))).into_response()
}

async fn get_event(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "get_event", "GET /api/events/{id}");
    let db = db.lock().unwrap();
    match db.events.iter().find(|e| e["id"] == id.as_str()) {
        Some(e) => Json(e.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Event not found"}))).into_response(),
    }
}

async fn list_organizers(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_organizers", "GET /api/events/{id}/organizers");
    Json(db.lock().unwrap().organizers.clone()).into_response()
}

async fn invite(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "invite", "POST /api/events/{id}/organizers");
    let mut db = db.lock().unwrap();
    db.organizers.push(json!({
        "userId": format!("pending-{}", body["email"].as_str().unwrap_or_default()),
        "email": body["email"],
        "firstName": "",
        "lastName": "",
        "role": body["role"],
        "permissionLevel": body["permissionLevel"],
    }));
    db.log("Member invited");
    Json(json!({"message": "Invitation sent"})).into_response()
}

async fn accept_invitation(State(db): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    guard!(db, headers, "accept_invitation", "POST /api/invitations/accept");
    match body["token"].as_str() {
        Some("good") => Json(json!({"eventId": "e1"})).into_response(),
        Some("used") => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid or expired invitation token"})),
        )
            .into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "Mail server down"}))).into_response(),
    }
}

async fn list_tasks(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_tasks", "GET /api/events/{id}/tasks");
    Json(db.lock().unwrap().tasks.clone()).into_response()
}

async fn create_task(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "create_task", "POST /api/events/{id}/tasks");
    let mut db = db.lock().unwrap();
    let tid = db.id("t");
    let task = task(&tid, body["title"].as_str().unwrap_or_default(), "ToDo");
    db.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn update_task_status(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "update_task_status", "PUT /api/tasks/{id}/status");
    let mut db = db.lock().unwrap();
    let Some(task) = db.tasks.iter_mut().find(|t| t["id"] == id.as_str()) else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Task not found"}))).into_response();
    };
    task["status"] = body["status"].clone();
    StatusCode::NO_CONTENT.into_response()
}

async fn budget_overview(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "budget_overview", "GET /api/events/{id}/budget");
    let db = db.lock().unwrap();
    let spent: f64 = db.expenses.iter().filter_map(|e| e["amount"].as_f64()).sum();
    Json(json!({
        "totalBudget": db.total_budget,
        "totalSpent": spent,
        "remainingBudget": db.total_budget - spent,
    }))
    .into_response()
}

async fn set_budget(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "set_budget", "PUT /api/events/{id}/budget");
    let mut db = db.lock().unwrap();
    let amount = body["totalBudget"].as_f64().unwrap_or_default();
    db.total_budget = amount;
    if let Some(event) = db.events.iter_mut().find(|e| e["id"] == id.as_str()) {
        event["totalBudget"] = json!(amount);
    }
    Json(json!({"totalBudget": amount})).into_response()
}

async fn list_expenses(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_expenses", "GET /api/events/{id}/expenses");
    Json(db.lock().unwrap().expenses.clone()).into_response()
}

async fn add_expense(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "add_expense", "POST /api/events/{id}/expenses");
    let mut db = db.lock().unwrap();
    let xid = db.id("x");
    let expense = json!({
        "id": xid,
        "title": body["title"],
        "amount": body["amount"],
        "expenseDate": body["expenseDate"],
        "budgetCategoryId": body["budgetCategoryId"],
    });
    db.expenses.push(expense.clone());
    db.log("Expense added");
    (StatusCode::CREATED, Json(expense)).into_response()
}

async fn list_categories(State(db): State<Shared>, headers: HeaderMap) -> Response {
    guard!(db, headers, "list_categories", "GET /api/budget-categories");
    Json(db.lock().unwrap().categories.clone()).into_response()
}

async fn set_preferences(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "set_preferences", "PUT /api/events/{id}/preferences");
    let mut db = db.lock().unwrap();
    if let Some(event) = db.events.iter_mut().find(|e| e["id"] == id.as_str()) {
        event["stylePreferences"] = body["stylePreferences"].clone();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_activity(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_activity", "GET /api/events/{id}/activity");
    Json(db.lock().unwrap().activity.clone()).into_response()
}

async fn post_comment(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "post_comment", "POST /api/events/{id}/comments");
    let mut db = db.lock().unwrap();
    let aid = db.id("a");
    db.activity.insert(
        0,
        json!({
            "id": aid,
            "itemType": "UserComment",
            "content": body["content"],
            "userFirstName": "Test",
            "userLastName": "User",
            "createdAt": "2026-01-01T11:00:00Z"
        }),
    );
    (StatusCode::CREATED, Json(json!({"id": aid}))).into_response()
}

async fn list_conversations(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_conversations", "GET /api/events/{id}/conversations");
    Json(db.lock().unwrap().conversations.clone()).into_response()
}

async fn list_messages(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_messages", "GET /api/conversations/{id}/messages");
    let db = db.lock().unwrap();
    Json(db.messages.get(&id).cloned().unwrap_or_default()).into_response()
}

async fn post_message(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "post_message", "POST /api/conversations/{id}/messages");
    let mut db = db.lock().unwrap();
    let mid = db.id("m");
    let message = json!({
        "id": mid,
        "content": body["content"],
        "senderId": USER_ID,
        "senderFirstName": "Test",
        "senderLastName": "User",
        "createdAt": "2026-01-01T12:00:00Z",
        "attachment": null
    });
    db.messages.entry(id).or_default().push(message.clone());
    (StatusCode::CREATED, Json(message)).into_response()
}

async fn list_polls(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "list_polls", "GET /api/events/{id}/polls");
    Json(db.lock().unwrap().polls.clone()).into_response()
}

async fn create_poll(State(db): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    guard!(db, headers, "create_poll", "POST /api/polls");
    let mut db = db.lock().unwrap();
    let pid = db.id("p");
    let mut options = Vec::new();
    for text in body["options"].as_array().cloned().unwrap_or_default() {
        let oid = db.id("o");
        options.push(json!({"id": oid, "optionText": text, "voteCount": 0, "voters": []}));
    }
    db.polls.push(json!({"id": pid, "title": body["title"], "options": options, "hasVoted": false}));
    (StatusCode::CREATED, Json(json!({"id": pid}))).into_response()
}

async fn vote(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "vote", "POST /api/polls/{id}/vote");
    let mut db = db.lock().unwrap();
    let Some(poll) = db.polls.iter_mut().find(|p| p["id"] == id.as_str()) else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Poll not found"}))).into_response();
    };
    let option_id = body["optionId"].clone();
    for opt in poll["options"].as_array_mut().unwrap() {
        let chosen = opt["id"] == option_id;
        let voters = opt["voters"].as_array_mut().unwrap();
        voters.retain(|v| *v != USER_ID);
        if chosen {
            voters.push(json!(USER_ID));
        }
        let count = voters.len();
        opt["voteCount"] = json!(count);
    }
    poll["hasVoted"] = json!(true);
    Json(json!({"message": "Vote recorded"})).into_response()
}

async fn list_vendors(State(db): State<Shared>, headers: HeaderMap) -> Response {
    guard!(db, headers, "public:list_vendors", "GET /api/vendors");
    Json(db.lock().unwrap().vendors.clone()).into_response()
}

async fn get_vendor(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "public:get_vendor", "GET /api/vendors/{id}");
    let db = db.lock().unwrap();
    match db.vendors.iter().find(|v| v["userId"] == id.as_str()) {
        Some(v) => Json(v.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Vendor not found"}))).into_response(),
    }
}

async fn create_booking(State(db): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    guard!(db, headers, "create_booking", "POST /api/bookings");
    if body["finalAmount"].as_f64().unwrap_or_default() <= 0.0 {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "Invalid amount"}))).into_response();
    }
    (StatusCode::CREATED, Json(json!({"bookingId": "b1"}))).into_response()
}

async fn list_services(State(db): State<Shared>, headers: HeaderMap) -> Response {
    guard!(db, headers, "list_services", "GET /api/vendor/dashboard/services");
    Json(db.lock().unwrap().services.clone()).into_response()
}

async fn create_service(State(db): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    guard!(db, headers, "create_service", "POST /api/vendor/dashboard/services");
    let mut db = db.lock().unwrap();
    let sid = db.id("s");
    db.services.push(json!({
        "id": sid,
        "serviceName": body["serviceName"],
        "serviceDescription": body["description"],
        "basePrice": body["basePrice"],
        "pricingType": body["pricingType"],
        "categoryId": body["categoryId"],
        "categoryName": "Photography",
        "isActive": body["isActive"],
    }));
    (StatusCode::CREATED, Json(json!({"id": sid}))).into_response()
}

async fn update_service(
    State(db): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    guard!(db, headers, "update_service", "PUT /api/vendor/dashboard/services/{id}");
    let mut db = db.lock().unwrap();
    let Some(svc) = db.services.iter_mut().find(|s| s["id"] == id.as_str()) else {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Service not found"}))).into_response();
    };
    svc["serviceName"] = body["serviceName"].clone();
    svc["basePrice"] = body["basePrice"].clone();
    svc["isActive"] = body["isActive"].clone();
    StatusCode::NO_CONTENT.into_response()
}

async fn delete_service(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    guard!(db, headers, "delete_service", "DELETE /api/vendor/dashboard/services/{id}");
    let mut db = db.lock().unwrap();
    db.services.retain(|s| s["id"] != id.as_str());
    StatusCode::NO_CONTENT.into_response()
}
