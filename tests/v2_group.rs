/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use httpmock::prelude::*;
    use smarteru::v2::{
        Group, ListGroupsQuery, MatchTag, Permission, PermissionCode, SmarterUError, Status, Tag,
        User,
    };

    fn member(email: &str) -> User {
        User {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_group_end_to_end() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let group = Group {
            description: Some("Everyone who sells".into()),
            tags: vec![Tag::by_name("Region", &["North"])],
            ..Group::named("My Group")
        };
        let xml = client.generator().create_group(&group).unwrap();
        assert!(xml.contains("<AccountAPI>test-account-key</AccountAPI>"));
        assert!(xml.contains("<Method>createGroup</Method>"));

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(helpers::package(&xml));
            then.status(200).body(
                "<SmarterU><Result>Success</Result><Info><Group>My Group</Group>\
                 <GroupID>12</GroupID></Info><Errors></Errors></SmarterU>",
            );
        });

        let created = client.create_group(&group).await.unwrap();
        assert_eq!(created.name.as_deref(), Some("My Group"));
        assert_eq!(created.group_id.as_deref(), Some("12"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn create_group_requires_name() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200).body(helpers::success(""));
        });
        let client = helpers::mock_client(&server);

        let group = Group {
            group_id: Some("12".into()),
            ..Default::default()
        };
        assert!(matches!(
            client.create_group(&group).await,
            Err(SmarterUError::MissingValue(_))
        ));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn update_group_renames_and_clears_old_name() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let mut group = Group {
            old_name: Some("Sales".into()),
            ..Group::named("Sales EMEA")
        };
        let xml = client.generator().update_group(&group).unwrap();
        assert!(xml.contains("<Identifier><Name>Sales</Name></Identifier>"));

        let mock = server.mock(|when, then| {
            when.method(POST).path("/").body(helpers::package(&xml));
            then.status(200).body(helpers::success(
                "<Group>Sales EMEA</Group><GroupID>12</GroupID>",
            ));
        });

        let resp = client.update_group(&mut group).await.unwrap();
        assert_eq!(resp.response.name.as_deref(), Some("Sales EMEA"));
        assert_eq!(group.old_name, None);
        assert_eq!(mock.calls(), 1);

        // A second update now locates the group by its new name
        let xml = client.generator().update_group(&group).unwrap();
        assert!(xml.contains("<Identifier><Name>Sales EMEA</Name></Identifier>"));
    }

    #[tokio::test]
    async fn get_group_reads_details() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let group = Group {
            group_id: Some("12".into()),
            ..Default::default()
        };

        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200).body(helpers::success(
                "<Group><Name>Sales</Name><GroupID>12</GroupID><Status>Active</Status>\
                 <Description>Everyone who sells</Description>\
                 <UserLimit><Enabled>0</Enabled><Amount>0</Amount></UserLimit></Group>",
            ));
        });

        let resp = client.get_group(&group).await.unwrap();
        let found = resp.response.unwrap();
        assert_eq!(found.name.as_deref(), Some("Sales"));
        assert_eq!(found.status, Some(Status::Active));
        assert_eq!(found.description.as_deref(), Some("Everyone who sells"));
        assert_eq!(found.user_limit_enabled, Some(false));
    }

    #[tokio::test]
    async fn get_group_without_identifier_is_rejected() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        assert!(matches!(
            client.get_group(&Group::default()).await,
            Err(SmarterUError::MissingValue(_))
        ));
    }

    #[tokio::test]
    async fn list_groups_reads_names_and_ids() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let query = ListGroupsQuery {
            group_name: Some(MatchTag::contains("Sales")),
            group_status: Some(Status::Active),
            ..Default::default()
        };
        let xml = client.generator().list_groups(&query).unwrap();

        server.mock(|when, then| {
            when.method(POST).path("/").body(helpers::package(&xml));
            then.status(200).body(helpers::success(
                "<Groups><Group><Name>Sales</Name><GroupID>12</GroupID></Group>\
                 <Group><Name>Sales EMEA</Name><GroupID>13</GroupID></Group></Groups>",
            ));
        });

        let groups = client.list_groups(&query).await.unwrap().response;
        let names: Vec<_> = groups.iter().filter_map(|g| g.name.as_deref()).collect();
        assert_eq!(names, vec!["Sales", "Sales EMEA"]);
        assert_eq!(groups[1].group_id.as_deref(), Some("13"));
    }

    #[tokio::test]
    async fn add_users_to_group_sends_add_actions() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let users = vec![member("a@example.com"), member("b@example.com")];
        let group = Group::named("Sales");

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .body_includes(urlencoding::encode("<Method>updateGroup</Method>").into_owned())
                .body_includes(urlencoding::encode("<Action>Add</Action>").into_owned());
            then.status(200).body(helpers::success_with_errors(
                "<Group>Sales</Group><GroupID>12</GroupID>",
                &[("UG:12", "b@example.com is already a member")],
            ));
        });

        let resp = client.add_users_to_group(&users, &group).await.unwrap();
        assert_eq!(resp.response.group_id.as_deref(), Some("12"));
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn remove_users_from_group_sends_remove_actions() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let users = vec![member("a@example.com")];
        let group = Group::named("Sales");

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .body_includes(urlencoding::encode("<Action>Remove</Action>").into_owned());
            then.status(200)
                .body(helpers::success("<Group>Sales</Group><GroupID>12</GroupID>"));
        });

        client.remove_users_from_group(&users, &group).await.unwrap();
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn membership_change_requires_user_identifiers() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let users = vec![member("a@example.com"), User::default()];
        assert!(matches!(
            client.add_users_to_group(&users, &Group::named("Sales")).await,
            Err(SmarterUError::MissingValue(_))
        ));
    }

    #[tokio::test]
    async fn grant_permissions_posts_codes() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);
        let user = member("a@example.com");
        let group = Group::named("Sales");
        let xml = client
            .generator()
            .change_permissions(
                &user,
                &group,
                &[
                    Permission::grant(PermissionCode::ManageUsers),
                    Permission::grant(PermissionCode::ViewLearnerResults),
                ],
            )
            .unwrap();

        let mock = server.mock(|when, then| {
            when.method(POST).path("/").body(helpers::package(&xml));
            then.status(200)
                .body(helpers::success("<Group>Sales</Group><GroupID>12</GroupID>"));
        });

        let resp = client
            .grant_permissions(&user, &group, &["MANAGE_USERS", "VIEW_LEARNER_RESULTS"])
            .await
            .unwrap();
        assert_eq!(resp.response.name.as_deref(), Some("Sales"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn revoke_permissions_denies_codes() {
        let server = MockServer::start();
        let client = helpers::mock_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST).path("/").body_includes(
                urlencoding::encode("<Action>Deny</Action><Code>PROCTOR</Code>").into_owned(),
            );
            then.status(200)
                .body(helpers::success("<Group>Sales</Group><GroupID>12</GroupID>"));
        });

        client
            .revoke_permissions(&member("a@example.com"), &Group::named("Sales"), &["PROCTOR"])
            .await
            .unwrap();
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn unknown_permission_never_reaches_server() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200).body(helpers::success(""));
        });
        let client = helpers::mock_client(&server);

        let err = client
            .grant_permissions(&member("a@example.com"), &Group::named("Sales"), &["invalid"])
            .await
            .unwrap_err();
        assert!(matches!(err, SmarterUError::InvalidArgument(_)));
        assert_eq!(mock.calls(), 0);
    }
}
