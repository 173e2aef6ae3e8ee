/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate smarteru;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use smarteru::v2::{Client, Creds, GetUserQuery, ListUsersQuery, MatchTag, StatusFilter};

// Prints every active user whose name contains the first argument as a JSON line,
// followed by the groups of the first match.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // Both keys come from SMARTERU_ACCOUNT_API_KEY and SMARTERU_USER_API_KEY
    let client = Client::new(Creds::from_env()?);

    let name_filter = std::env::args().nth(1);
    let query = ListUsersQuery {
        name: name_filter.as_deref().map(MatchTag::contains),
        user_status: Some(StatusFilter::Active),
        page_size: Some(100),
        ..Default::default()
    };

    let users = client.list_users_stream(query);
    pin_mut!(users);
    let mut first_email = None;
    let mut count = 0;
    while let Some(user) = users.next().await {
        let user = user?;
        if first_email.is_none() {
            first_email = user.email.clone();
        }
        println!("{}", serde_json::to_string(&user)?);
        count += 1;
    }
    println!("{count} user(s) found");

    if let Some(email) = first_email {
        let groups = client.get_user_groups(&GetUserQuery::by_email(&email)).await?;
        for membership in groups.response {
            println!(
                "{email} in {} (home group: {}) permissions: {:?}",
                membership.group_name().or(membership.group_id()).unwrap_or("?"),
                membership.home_group,
                membership
                    .permissions
                    .iter()
                    .map(|p| p.code.as_api_str())
                    .collect::<Vec<_>>()
            );
        }
        for error in groups.errors {
            eprintln!("{}: {}", error.code, error.message);
        }
    }
    Ok(())
}
