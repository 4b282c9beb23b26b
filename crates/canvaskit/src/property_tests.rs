//! Property-based tests for canvaskit
//!
//! Uses proptest to check decoding invariants over generated documents:
//! dictionary round-trips, independence from `included` order, and
//! all-or-nothing collections.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use serde_json::json;

    use crate::aggregate::aggregate_errors;
    use crate::document::Document;
    use crate::json::JsonValue;
    use crate::types::{Account, Canvas, Color, Organization, Project, User};

    // ===== Strategy Generators =====

    fn arb_id() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,12}"
    }

    fn arb_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,40}"
    }

    fn arb_date() -> impl Strategy<Value = DateTime<Utc>> {
        (0i64..2_000_000_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn arb_color() -> impl Strategy<Value = Option<Color>> {
        proptest::option::of(any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::new(r, g, b)))
    }

    fn arb_organization() -> impl Strategy<Value = Organization> {
        (arb_id(), arb_text(), arb_id(), any::<u64>(), arb_color()).prop_map(
            |(id, name, slug, members_count, color)| Organization {
                id,
                name,
                slug,
                members_count,
                color,
            },
        )
    }

    fn arb_project() -> impl Strategy<Value = Project> {
        (arb_id(), arb_text(), arb_id(), any::<bool>(), any::<u64>(), arb_color()).prop_map(
            |(id, name, slug, is_personal, members_count, color)| Project {
                id,
                name,
                slug,
                is_personal,
                members_count,
                color,
            },
        )
    }

    fn arb_canvas() -> impl Strategy<Value = Canvas> {
        (
            arb_id(),
            arb_organization(),
            any::<(bool, bool)>(),
            arb_text(),
            arb_text(),
            arb_date(),
            proptest::option::of(arb_date()),
        )
            .prop_map(
                |(id, organization, (is_writable, is_public_writable), title, summary, updated_at, archived_at)| {
                    Canvas {
                        id,
                        organization,
                        is_writable,
                        is_public_writable,
                        title,
                        summary,
                        native_version: "0.0.1".into(),
                        updated_at,
                        archived_at,
                    }
                },
            )
    }

    fn arb_account() -> impl Strategy<Value = Account> {
        (
            arb_id(),
            "[A-Za-z0-9]{8,32}",
            "[a-z]{1,8}@[a-z]{1,8}\\.com",
            proptest::option::of(arb_date()),
            proptest::option::of("[a-z]{1,10}"),
            any::<bool>(),
        )
            .prop_map(|(id, access_token, email, verified_at, username, has_avatar)| Account {
                id: id.clone(),
                access_token,
                email,
                verified_at,
                user: User {
                    avatar_url: has_avatar.then(|| {
                        url::Url::parse(&format!("https://example.com/{id}.png")).unwrap()
                    }),
                    id,
                    username,
                },
            })
    }

    fn canvas_resource(id: &str, org_id: &str) -> JsonValue {
        json!({
            "id": id,
            "type": "canvases",
            "attributes": {
                "is_writable": true,
                "is_public_writable": false,
                "updated_at": "2016-05-02T18:00:00Z",
                "title": format!("Canvas {id}"),
                "summary": "",
                "native_version": "0.0.1"
            },
            "relationships": {"org": {"data": {"type": "orgs", "id": org_id}}}
        })
    }

    fn org_resource(id: &str) -> JsonValue {
        json!({
            "id": id,
            "type": "orgs",
            "attributes": {"name": id, "slug": format!("slug-{id}"), "members_count": 1}
        })
    }

    // ===== Dictionary Round-Trips =====

    proptest! {
        /// Property: serializing then deserializing reproduces the value
        #[test]
        fn prop_organization_round_trip(org in arb_organization()) {
            let value = serde_json::to_value(&org).unwrap();
            prop_assert_eq!(serde_json::from_value::<Organization>(value).unwrap(), org);
        }

        #[test]
        fn prop_project_round_trip(project in arb_project()) {
            let value = serde_json::to_value(&project).unwrap();
            prop_assert_eq!(serde_json::from_value::<Project>(value).unwrap(), project);
        }

        #[test]
        fn prop_canvas_round_trip(canvas in arb_canvas()) {
            let value = serde_json::to_value(&canvas).unwrap();
            prop_assert_eq!(serde_json::from_value::<Canvas>(value).unwrap(), canvas);
        }

        #[test]
        fn prop_account_round_trip(account in arb_account()) {
            let value = serde_json::to_value(&account).unwrap();
            prop_assert_eq!(serde_json::from_value::<Account>(value).unwrap(), account);
        }
    }

    // ===== Document Decoding =====

    proptest! {
        /// Property: relationship resolution does not depend on `included` order
        #[test]
        fn prop_included_order_is_irrelevant(
            org_count in 1usize..6,
            seed in any::<u64>(),
        ) {
            let orgs: Vec<String> = (0..org_count).map(|i| format!("o{i}")).collect();
            let data: Vec<JsonValue> = orgs
                .iter()
                .enumerate()
                .map(|(i, org)| canvas_resource(&format!("c{i}"), org))
                .collect();

            let mut included: Vec<JsonValue> = orgs.iter().map(|o| org_resource(o)).collect();
            let forward = Document::from_value(json!({"data": data, "included": included.clone()}))
                .unwrap()
                .decode_many::<Canvas>()
                .unwrap();

            let rotation = (seed as usize) % included.len();
            included.rotate_left(rotation);
            included.reverse();
            let shuffled = Document::from_value(json!({"data": data, "included": included}))
                .unwrap()
                .decode_many::<Canvas>()
                .unwrap();

            prop_assert_eq!(forward, shuffled);
        }

        /// Property: one undecodable element fails the whole collection
        #[test]
        fn prop_collection_is_all_or_nothing(
            len in 1usize..8,
            broken in any::<prop::sample::Index>(),
        ) {
            let broken = broken.index(len);
            let data: Vec<JsonValue> = (0..len)
                .map(|i| {
                    let mut canvas = canvas_resource(&format!("c{i}"), "o1");
                    if i == broken {
                        canvas["attributes"].as_object_mut().unwrap().remove("title");
                    }
                    canvas
                })
                .collect();

            let result = Document::from_value(json!({"data": data, "included": [org_resource("o1")]}))
                .unwrap()
                .decode_many::<Canvas>();

            let err = result.unwrap_err();
            prop_assert_eq!(err.as_decode_error().map(|e| e.field().to_string()), Some("title".to_string()));
        }

        /// Property: collections decode in document order
        #[test]
        fn prop_collection_preserves_order(ids in proptest::collection::vec(arb_id(), 0..10)) {
            let data: Vec<JsonValue> = ids.iter().map(|id| canvas_resource(id, "o1")).collect();
            let canvases = Document::from_value(json!({"data": data, "included": [org_resource("o1")]}))
                .unwrap()
                .decode_many::<Canvas>()
                .unwrap();

            let decoded: Vec<String> = canvases.into_iter().map(|c| c.id).collect();
            prop_assert_eq!(decoded, ids);
        }

        /// Property: every detail string survives aggregation verbatim
        #[test]
        fn prop_details_survive_aggregation(details in proptest::collection::vec("[a-zA-Z ]{1,20}", 1..5)) {
            let errors: Vec<JsonValue> = details.iter().map(|d| json!({"detail": d})).collect();
            let message = aggregate_errors(&errors).unwrap();
            prop_assert_eq!(message, details.join(" "));
        }
    }
}
