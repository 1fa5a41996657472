//! User display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{User, UserId};

#[derive(Tabled)]
struct UserRow<'a> {
    #[tabled(rename = "ID")]
    id: UserId,
    #[tabled(rename = "Username")]
    username: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Active")]
    active: &'static str,
}

/// Format the user list as a table, marking the active user
pub fn format_user_list(users: &[User], active: Option<UserId>) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let rows = users.iter().map(|user| UserRow {
        id: user.id,
        username: &user.username,
        email: &user.email,
        active: if Some(user.id) == active { "*" } else { "" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("Users List:\n{}\n", table)
}
