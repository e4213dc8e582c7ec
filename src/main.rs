// src/main.rs

use env_logger::Env;

use workflow::controller::{TaskListController, UserListController};
use workflow::models::Status;
use workflow::{store, Config, Error};

/// Connects to the configured store variant and prints a board summary.
/// Useful as a smoke check that the backend is reachable and the collections
/// decode; the interactive UI lives in a separate frontend.
#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let store = store::connect(&config).await?;

    let mut users = UserListController::new(store.clone());
    let mut tasks = TaskListController::new(store);
    users.refresh().await?;
    tasks.refresh().await?;

    let columns = tasks.column_view();
    println!(
        "{} tasks ({} backlog, {} in progress, {} done), {} users",
        tasks.tasks().len(),
        columns.backlog.len(),
        columns.in_progress.len(),
        columns.done.len(),
        users.users().len()
    );

    for user in users.users() {
        println!(
            "  {} <{}> [{}]: {}h backlog, {}h in progress, {}h done",
            user.name,
            user.email,
            user.team,
            tasks.hours_by_user_and_status(&user.name, Status::Backlog),
            tasks.hours_by_user_and_status(&user.name, Status::InProgress),
            tasks.hours_by_user_and_status(&user.name, Status::Done),
        );
    }

    Ok(())
}
