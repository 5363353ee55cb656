//! Section state machines against the mock backend.

mod common;

use assert_matches::assert_matches;
use serde_json::json;

use mywedding_core::organizer::PermissionLevel;
use mywedding_core::task::TaskStatus;
use mywedding_planner::sections::dashboard::DashboardView;
use mywedding_planner::sections::event_header::EVENT_NOT_FOUND_MESSAGE;
use mywedding_planner::sections::style::StyleView;
use mywedding_planner::sections::{
    ActivitySection, BudgetSection, ChecklistSection, Dashboard, EventHeader, PollsSection,
    StyleSection, TeamSection,
};
use mywedding_planner::forms::QuizProgress;
use mywedding_planner::{Loadable, PlannerError};

use common::{event, setup, setup_signed_out, task, Backend};

fn seeded() -> Backend {
    Backend {
        events: vec![event("e1", "Test Wedding", "2026-01-01")],
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_shows_one_card_per_event() {
    let (ctx, _db) = setup(seeded()).await;
    let mut dashboard = Dashboard::new(&ctx);
    assert_eq!(dashboard.view(), DashboardView::Loading);

    dashboard.mount().await;
    let DashboardView::Cards(cards) = dashboard.view() else {
        panic!("expected cards, got {:?}", dashboard.view());
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Test Wedding");
}

#[tokio::test]
async fn dashboard_accepts_date_time_event_dates() {
    let (ctx, _db) = setup(Backend {
        events: vec![event("e1", "Test Wedding", "2026-01-01T00:00:00")],
        ..Default::default()
    })
    .await;
    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;

    let DashboardView::Cards(cards) = dashboard.view() else {
        panic!("expected cards, got {:?}", dashboard.view());
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].date_label, "Thursday, January 1, 2026");
}

#[tokio::test]
async fn dashboard_empty_state() {
    let (ctx, _db) = setup(Backend::default()).await;
    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;
    assert_eq!(dashboard.view(), DashboardView::Empty);
}

#[tokio::test]
async fn dashboard_failure_shows_body_message() {
    let (ctx, db) = setup(seeded()).await;
    db.lock()
        .unwrap()
        .fail("list_events", 500, json!({"message": "Database unavailable"}));

    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;
    assert_eq!(
        dashboard.view(),
        DashboardView::Failed("Database unavailable".into())
    );
}

#[tokio::test]
async fn mount_without_user_makes_no_request() {
    let (ctx, db) = setup_signed_out(seeded()).await;
    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;

    assert_eq!(dashboard.view(), DashboardView::Loading);
    assert!(db.lock().unwrap().calls.is_empty());
}

#[tokio::test]
async fn dashboard_create_event_refetches() {
    let (ctx, db) = setup(Backend::default()).await;
    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;

    let form = dashboard.create_form_mut();
    form.open();
    form.event_name = "Beach Day".into();
    form.event_date = "2026-08-15".into();
    let created = dashboard.create_event().await.unwrap();

    assert!(!dashboard.create_form().state().is_open());
    let DashboardView::Cards(cards) = dashboard.view() else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].event_id, created.event_id);
    assert_eq!(db.lock().unwrap().count("GET /api/events"), 2);
}

#[tokio::test]
async fn create_event_validation_makes_no_request() {
    let (ctx, db) = setup(Backend::default()).await;
    let mut dashboard = Dashboard::new(&ctx);
    dashboard.create_form_mut().open();

    let err = dashboard.create_event().await.unwrap_err();
    assert_matches!(err, PlannerError::Validation(_));
    assert_eq!(dashboard.create_form().state().error(), Some("Event name is required."));
    assert!(dashboard.create_form().state().is_open());
    assert_eq!(db.lock().unwrap().count("POST /api/events"), 0);
}

// ---------------------------------------------------------------------------
// Event header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn header_not_found_message() {
    let (ctx, _db) = setup(seeded()).await;
    let mut header = EventHeader::new(&ctx, "missing");
    header.mount().await;
    assert_eq!(header.event().error(), Some(EVENT_NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn header_budget_label() {
    let mut seed = seeded();
    seed.events[0]["totalBudget"] = json!(1500000.0);
    let (ctx, _db) = setup(seed).await;

    let mut header = EventHeader::new(&ctx, "e1");
    header.mount().await;
    assert_eq!(header.event().data().unwrap().event_name, "Test Wedding");
    assert_eq!(header.budget_label().as_deref(), Some("Total Budget: LKR 1,500,000"));
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invite_refetches_team_and_rejects_bad_email() {
    let mut seed = seeded();
    seed.organizers = vec![json!({
        "userId": "u1", "email": "me@x.lk", "firstName": "Test", "lastName": "User",
        "role": "Bride", "permissionLevel": "Owner"
    })];
    let (ctx, db) = setup(seed).await;

    let mut team = TeamSection::new(&ctx, "e1");
    team.mount().await;
    assert_eq!(team.organizers().data().unwrap().len(), 1);
    assert!(team.can_edit());

    let form = team.invite_form_mut();
    form.open();
    form.email = "not-an-email".into();
    assert_matches!(team.send_invite().await, Err(PlannerError::Validation(_)));
    assert_eq!(
        team.invite_form().state().error(),
        Some("Please enter a valid email address.")
    );

    let form = team.invite_form_mut();
    form.email = "amma@x.lk".into();
    form.permission_level = PermissionLevel::Viewer;
    team.send_invite().await.unwrap();

    assert!(!team.invite_form().state().is_open());
    let organizers = team.organizers().data().unwrap();
    assert_eq!(organizers.len(), 2);
    assert_eq!(organizers[1].role, "Family");
    assert_eq!(organizers[1].permission_level, PermissionLevel::Viewer);
    assert_eq!(db.lock().unwrap().count("POST /api/events/e1/organizers"), 1);
}

#[tokio::test]
async fn invite_failure_keeps_modal_open() {
    let (ctx, db) = setup(seeded()).await;
    db.lock()
        .unwrap()
        .fail("invite", 409, json!({"message": "User is already an organizer"}));

    let mut team = TeamSection::new(&ctx, "e1");
    let form = team.invite_form_mut();
    form.open();
    form.email = "dup@x.lk".into();
    assert!(team.send_invite().await.is_err());
    assert!(team.invite_form().state().is_open());
    assert!(team.invite_form().state().can_submit());
    assert_eq!(
        team.invite_form().state().error(),
        Some("User is already an organizer")
    );
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_round_trip_issues_two_status_requests() {
    let mut seed = seeded();
    seed.tasks = vec![task("t1", "Book venue", "ToDo"), task("t2", "Send invites", "InProgress")];
    let (ctx, db) = setup(seed).await;

    let mut checklist = ChecklistSection::new(&ctx, "e1");
    checklist.mount().await;
    let status = |c: &ChecklistSection| {
        c.tasks()
            .data()
            .unwrap()
            .iter()
            .find(|t| t.id == "t1")
            .unwrap()
            .status
    };
    assert_eq!(status(&checklist), TaskStatus::ToDo);

    checklist.toggle("t1").await.unwrap();
    assert_eq!(status(&checklist), TaskStatus::Completed);
    // Completed tasks sink to the bottom.
    assert_eq!(checklist.tasks().data().unwrap().last().unwrap().id, "t1");

    checklist.toggle("t1").await.unwrap();
    assert_eq!(status(&checklist), TaskStatus::ToDo);
    assert_eq!(db.lock().unwrap().count("PUT /api/tasks/t1/status"), 2);
    assert!(!checklist.is_updating("t1"));
}

#[tokio::test]
async fn toggle_failure_sets_per_task_error() {
    let mut seed = seeded();
    seed.tasks = vec![task("t1", "Book venue", "ToDo")];
    let (ctx, db) = setup(seed).await;
    db.lock()
        .unwrap()
        .fail("update_task_status", 403, json!({"message": "Viewers cannot edit tasks"}));

    let mut checklist = ChecklistSection::new(&ctx, "e1");
    checklist.mount().await;
    assert!(checklist.toggle("t1").await.is_err());

    assert_eq!(checklist.task_error("t1"), Some("Viewers cannot edit tasks"));
    assert_eq!(
        checklist.tasks().data().unwrap()[0].status,
        TaskStatus::ToDo
    );
}

#[tokio::test]
async fn create_task_clears_title_and_refetches() {
    let (ctx, _db) = setup(seeded()).await;
    let mut checklist = ChecklistSection::new(&ctx, "e1");
    checklist.mount().await;

    checklist.create_form_mut().title = "Order cake".into();
    checklist.create_task().await.unwrap();
    assert!(checklist.create_form().title.is_empty());
    assert!(checklist.create_form().state().is_open());
    assert_eq!(checklist.tasks().data().unwrap()[0].title, "Order cake");
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[tokio::test]
async fn budget_fetches_overview_and_expenses() {
    let mut seed = seeded();
    seed.total_budget = 1000.0;
    seed.categories = vec![json!({"id": "c1", "name": "Venue"}), json!({"id": "c2", "name": "Food"})];
    let (ctx, db) = setup(seed).await;

    let mut budget = BudgetSection::new(&ctx, "e1");
    budget.mount().await;
    let snapshot = budget.budget().data().unwrap();
    assert_eq!(snapshot.overview.total_budget, 1000.0);
    assert!(snapshot.expenses.is_empty());

    budget.open_expense_form().await;
    assert_eq!(budget.expense_form().category_id, "c1");
    let form = budget.expense_form_mut();
    form.title = "Deposit".into();
    form.amount = "250".into();
    budget.add_expense().await.unwrap();

    let snapshot = budget.budget().data().unwrap();
    assert_eq!(snapshot.expenses.len(), 1);
    assert_eq!(snapshot.overview.total_spent, 250.0);
    assert_eq!(snapshot.overview.remaining_budget, 750.0);

    let db = db.lock().unwrap();
    assert_eq!(db.count("GET /api/events/e1/budget"), 2);
    assert_eq!(db.count("GET /api/events/e1/expenses"), 2);
}

#[tokio::test]
async fn expense_amount_must_be_positive() {
    let (ctx, db) = setup(seeded()).await;
    let mut budget = BudgetSection::new(&ctx, "e1");
    budget.open_expense_form().await;
    let form = budget.expense_form_mut();
    form.title = "Deposit".into();
    form.amount = "-5".into();
    form.category_id = "c1".into();

    assert_matches!(budget.add_expense().await, Err(PlannerError::Validation(_)));
    assert_eq!(budget.expense_form().state().error(), Some("Please enter a valid amount."));
    assert_eq!(db.lock().unwrap().count("POST /api/events/e1/expenses"), 0);
}

#[tokio::test]
async fn budget_failure_when_either_fetch_fails() {
    let (ctx, db) = setup(seeded()).await;
    db.lock()
        .unwrap()
        .fail("list_expenses", 500, json!({"message": "Expenses unavailable"}));
    let mut budget = BudgetSection::new(&ctx, "e1");
    budget.mount().await;
    assert_eq!(budget.budget().error(), Some("Expenses unavailable"));
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_comment_never_issues_request() {
    let (ctx, db) = setup(seeded()).await;
    let mut activity = ActivitySection::new(&ctx, "e1");
    activity.mount().await;

    activity.draft = "   ".into();
    assert!(!activity.post_comment().await.unwrap());
    assert_eq!(db.lock().unwrap().count("POST /api/events/e1/comments"), 0);

    activity.draft = "Loved the venue!".into();
    assert!(activity.post_comment().await.unwrap());
    assert!(activity.draft.is_empty());
    let feed = activity.feed().data().unwrap();
    assert_eq!(feed[0].content, "Loved the venue!");
}

// ---------------------------------------------------------------------------
// Polls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_vote_in_poll() {
    let (ctx, db) = setup(seeded()).await;
    let mut polls = PollsSection::new(&ctx, "e1");
    polls.mount().await;
    assert!(polls.polls().data().unwrap().is_empty());

    polls.draft_mut().title = "Which cake?".into();
    polls.draft_mut().set_option(0, "Chocolate");
    assert_matches!(polls.create_poll().await, Err(PlannerError::Validation(_)));
    assert_eq!(db.lock().unwrap().count("POST /api/polls"), 0);

    polls.draft_mut().set_option(1, "Vanilla");
    polls.create_poll().await.unwrap();
    assert!(polls.draft().title.is_empty());

    let poll = polls.polls().data().unwrap()[0].clone();
    let vanilla = poll.options[1].id.clone();
    polls.vote(&poll.id, &vanilla).await.unwrap();

    let poll = &polls.polls().data().unwrap()[0];
    assert_eq!(poll.total_votes(), 1);
    assert_eq!(poll.percentage(&poll.options[1]), 100);
    assert_eq!(poll.my_vote("u1").unwrap().option_text, "Vanilla");
}

#[tokio::test]
async fn vote_for_unknown_option_is_rejected_locally() {
    let mut seed = seeded();
    seed.polls = vec![json!({
        "id": "p1", "title": "Venue?", "hasVoted": false,
        "options": [
            {"id": "o1", "optionText": "Beach", "voteCount": 0, "voters": []},
            {"id": "o2", "optionText": "Hall", "voteCount": 0, "voters": []}
        ]
    })];
    let (ctx, db) = setup(seed).await;
    let mut polls = PollsSection::new(&ctx, "e1");
    polls.mount().await;

    assert!(polls.vote("p1", "nope").await.is_err());
    assert!(polls.vote_error().is_some());
    assert_eq!(db.lock().unwrap().count("POST /api/polls/p1/vote"), 0);
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

#[tokio::test]
async fn style_prompt_then_summary_after_quiz() {
    let (ctx, _db) = setup(seeded()).await;
    let mut style = StyleSection::new(&ctx, "e1");
    style.mount().await;
    assert_eq!(style.view(), StyleView::Prompt);

    style.open_quiz();
    assert_eq!(style.answer("modern").await.unwrap(), QuizProgress::Next(1));
    assert_eq!(style.answer("candid").await.unwrap(), QuizProgress::Next(2));
    assert_eq!(style.answer("food").await.unwrap(), QuizProgress::Submitted);

    let StyleView::Summary(rows) = style.view() else {
        panic!("expected summary, got {:?}", style.view());
    };
    assert_eq!(rows.len(), 3);
    assert!(!style.quiz().state().is_open());
}

#[tokio::test]
async fn quiz_rejects_unknown_answer() {
    let (ctx, _db) = setup(seeded()).await;
    let mut style = StyleSection::new(&ctx, "e1");
    style.open_quiz();
    assert_matches!(style.answer("baroque").await, Err(PlannerError::Validation(_)));
    assert_eq!(style.quiz().step(), 0);
    assert_matches!(style.preferences(), Loadable::Loading);
}
