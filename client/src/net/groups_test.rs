use super::*;
use crate::net::transport::Body;
use crate::test_support::Harness;

fn group_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "invite_code": "AB12CD34", "created_by": "u1" })
}

#[tokio::test]
async fn list_groups_decodes_array() {
    let h = Harness::signed_in("tok");
    h.transport
        .push_json(200, serde_json::json!([group_json("g1", "Flat"), group_json("g2", "Trip")]));

    let groups = list_groups(&h.api).await.unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Flat", "Trip"]);
    assert_eq!(h.transport.requests()[0].path, "/groups/all");
}

#[tokio::test]
async fn create_group_trims_and_drops_blank_description() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(201, group_json("g1", "Flat"));

    create_group(&h.api, "  Flat ", Some("   ")).await.unwrap();

    let request = &h.transport.requests()[0];
    assert_eq!(request.path, "/groups/create");
    assert_eq!(
        request.body,
        Body::Json(serde_json::json!({ "name": "Flat", "description": null }))
    );
}

#[tokio::test]
async fn join_group_posts_invite_code() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(200, group_json("g9", "Club"));

    let group = join_group(&h.api, " AB12CD34 ").await.unwrap();
    assert_eq!(group.id, "g9");
    assert_eq!(
        h.transport.requests()[0].body,
        Body::Json(serde_json::json!({ "invite_code": "AB12CD34" }))
    );
}

#[tokio::test]
async fn get_group_uses_single_endpoint() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(200, group_json("g1", "Flat"));
    get_group(&h.api, "g1").await.unwrap();
    assert_eq!(h.transport.requests()[0].path, "/groups/single/g1");
}

#[tokio::test]
async fn members_are_resolved_in_order() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(
        200,
        serde_json::json!([
            { "id": "m1", "group_id": "g1", "user_id": "u2" },
            { "id": "m2", "group_id": "g1", "user_id": "u1" }
        ]),
    );
    h.transport
        .push_json(200, serde_json::json!({ "id": "u2", "first_name": "Bob", "last_name": "Ray" }));
    h.transport
        .push_json(200, serde_json::json!({ "id": "u1", "first_name": "Ann", "last_name": "Lee" }));

    let members = get_group_members(&h.api, "g1").await.unwrap();
    let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["u2", "u1"]);

    let paths: Vec<String> = h.transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/groups/get-members/g1", "/users/single/u2", "/users/single/u1"]);
}

#[tokio::test]
async fn member_lookup_failure_stops_resolution() {
    let h = Harness::signed_in("tok");
    h.transport.push_json(
        200,
        serde_json::json!([{ "user_id": "u1" }, { "user_id": "u2" }]),
    );
    h.transport.push_json(500, serde_json::json!({ "detail": "db down" }));

    let err = get_group_members(&h.api, "g1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(h.transport.request_count(), 2);
}

#[tokio::test]
async fn expired_session_while_listing_signs_out() {
    let h = Harness::signed_in("stale");
    h.transport.push_json(401, serde_json::json!({ "detail": "Token expired" }));
    let err = list_groups(&h.api).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert!(!h.session.is_authenticated());
}
