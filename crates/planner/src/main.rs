use std::sync::Arc;

use anyhow::Context;
use mywedding_client::ClientConfig;
use mywedding_planner::sections::dashboard::{DashboardView, NO_EVENTS_HINT, NO_EVENTS_TITLE};
use mywedding_planner::sections::Dashboard;
use mywedding_planner::store::AuthUser;
use mywedding_planner::token::StaticToken;
use mywedding_planner::workspace::EventWorkspace;
use mywedding_planner::{Loadable, PlannerContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mywedding=info,mywedding_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("invalid client configuration")?;
    tracing::info!(base_url = %config.base_url, "Using backend");

    let token = std::env::var("MYWEDDING_TOKEN").context("MYWEDDING_TOKEN must be set")?;
    let user_id = std::env::var("MYWEDDING_USER_ID").unwrap_or_else(|_| "cli".into());

    let ctx = PlannerContext::from_config(&config)?;
    ctx.sign_in(AuthUser::new(user_id), Arc::new(StaticToken::new(token)))
        .await
        .context("sign-in failed")?;

    let mut dashboard = Dashboard::new(&ctx);
    dashboard.mount().await;
    match dashboard.view() {
        DashboardView::Loading => println!("Loading..."),
        DashboardView::Failed(msg) => anyhow::bail!(msg),
        DashboardView::Empty => println!("{NO_EVENTS_TITLE}\n{NO_EVENTS_HINT}"),
        DashboardView::Cards(cards) => {
            for card in cards {
                println!("{}  {}  ({})", card.event_id, card.title, card.date_label);
            }
        }
    }

    if let Ok(event_id) = std::env::var("MYWEDDING_EVENT_ID") {
        let mut workspace = EventWorkspace::new(&ctx, event_id);
        workspace.mount().await;
        print_workspace(&workspace);
    }

    ctx.sign_out().await;
    Ok(())
}

fn print_workspace(ws: &EventWorkspace) {
    match ws.header.event() {
        Loadable::Ready(event) => {
            println!("\n{} on {}", event.event_name, event.date_label());
            if let Some(label) = ws.header.budget_label() {
                println!("{label}");
            }
        }
        Loadable::Failed(msg) => {
            println!("\n{msg}");
            return;
        }
        Loadable::Loading => return,
    }

    if let Some(team) = ws.team.organizers().data() {
        println!("\nTeam ({})", team.len());
        for o in team {
            println!("  [{}] {} - {} ({})", o.initials(), o.display_name(), o.role, o.permission_level.label());
        }
    }
    if let Some(tasks) = ws.checklist.tasks().data() {
        println!("\nChecklist");
        for t in tasks {
            let mark = if t.status.is_completed() { "x" } else { " " };
            println!("  [{mark}] {}", t.title);
        }
    }
    if let Some(budget) = ws.budget.budget().data() {
        let o = &budget.overview;
        println!(
            "\nBudget: spent {:.2} of {:.2} ({:.0}%), remaining {:.2}",
            o.total_spent,
            o.total_budget,
            o.spent_percentage(),
            o.remaining_budget
        );
    }
    if let Some(feed) = ws.activity.feed().data() {
        println!("\nRecent activity");
        for item in feed.iter().take(10) {
            println!("  {}", item.headline());
        }
    }
    if let Some(polls) = ws.polls.polls().data() {
        for poll in polls {
            println!("\nPoll: {} ({} votes)", poll.title, poll.total_votes());
            for opt in &poll.options {
                println!("  {} {}%", opt.option_text, poll.percentage(opt));
            }
        }
    }
}
