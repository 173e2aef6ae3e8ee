/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # SmarterU
//!
//! This library was created for working with the SmarterU learning management system
//! API. SmarterU accepts one XML document per request, posted as the `Package` form
//! field, and answers with an XML envelope holding a result, an info block and a list
//! of errors.
//!
//! For further details on the API refer to the
//! [SmarterU API Docs](https://support.smarteru.com/docs/api-overview)
//!
//! ## Features
//!
//! - Users
//!     - Create, update and retrieve a user
//!     - List users one page at a time or as a stream
//!     - List the groups a user belongs to along with their permissions
//! - Groups
//!     - Create, update, retrieve and list groups
//!     - Add users to and remove users from a group
//!     - Grant and revoke a user's permissions within a group
//! - Learner report retrieval
//! - External authorization (password-less sign in)
//! - Timezone lookups between IANA style names and SmarterU display values
//! - Lower level interface for handling the raw communication
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`v2::ApiClient`] and [`v2::XmlGenerator`] are a way to make request/responses in a
//! more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! smarteru = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need an account API key and a user API key from SmarterU prior to using
//! the API**
//!
//! ```rust,no_run
//! use smarteru::v2::{Client, Creds, Group, ListUsersQuery, MatchTag, SmarterUError, User};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn enroll_sales_team(client: &Client) -> Result<(), SmarterUError> {
//!     let sales = client
//!         .create_group(&Group::named("Sales"))
//!         .await?;
//!
//!     // Walk every user whose name contains "Smith"
//!     let users = client.list_users_stream(ListUsersQuery {
//!         name: Some(MatchTag::contains("Smith")),
//!         ..Default::default()
//!     });
//!     pin_mut!(users);
//!     let mut smiths: Vec<User> = Vec::new();
//!     while let Some(user) = users.next().await {
//!         smiths.push(user?);
//!     }
//!
//!     let resp = client.add_users_to_group(&smiths, &sales).await?;
//!     for error in resp.errors {
//!         println!("{}: {}", error.code, error.message);
//!     }
//!     Ok(())
//! }
//!
//! # async fn run() -> Result<(), SmarterUError> {
//! let client = Client::new(Creds::from_env()?);
//! enroll_sales_team(&client).await
//! # }
//! ```
//!
pub mod v2;
