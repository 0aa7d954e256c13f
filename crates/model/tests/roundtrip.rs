use model::{
    core::{consistency::WriteConsistency, limit::RecordLimit, version::VersionPolicy},
    request::{
        options::{ScrollOptions, ScrollQuery},
        reindex::{DestinationTemplate, ReindexRequest},
        update_by_query::UpdateByQueryRequest,
    },
    response::{
        BulkByScrollResponse, ReindexResponse,
        failure::{IndexingFailure, SearchFailure},
    },
    script::{Script, ScriptKind},
    wire::{self, WireMessage},
};
use proptest::prelude::*;
use std::time::Duration;

mod strategies {
    use super::*;

    pub fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i64>().prop_map(serde_json::Value::from),
            "[a-z0-9 ]{0,12}".prop_map(serde_json::Value::from),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..4)
                    .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
            ]
        })
    }

    /// Filters are always JSON objects. A bare `null` filter would be
    /// indistinguishable from an absent one on the wire.
    pub fn filter() -> impl Strategy<Value = serde_json::Value> {
        prop::collection::btree_map("[a-z]{1,8}", json_value(), 1..3)
            .prop_map(|map| serde_json::Value::Object(map.into_iter().collect()))
    }

    pub fn version_policy() -> impl Strategy<Value = VersionPolicy> {
        prop_oneof![
            Just(VersionPolicy::MatchAny),
            Just(VersionPolicy::MatchDeleted),
            any::<u64>().prop_map(VersionPolicy::Exact),
        ]
    }

    pub fn record_limit() -> impl Strategy<Value = RecordLimit> {
        prop_oneof![
            Just(RecordLimit::Unbounded),
            (1u64..1_000_000).prop_map(RecordLimit::AtMost),
        ]
    }

    pub fn consistency() -> impl Strategy<Value = WriteConsistency> {
        prop_oneof![
            Just(WriteConsistency::One),
            Just(WriteConsistency::Quorum),
            Just(WriteConsistency::All),
        ]
    }

    pub fn script() -> impl Strategy<Value = Script> {
        (
            "[a-z_]{1,24}",
            prop_oneof![
                Just(ScriptKind::Inline),
                Just(ScriptKind::Stored),
                Just(ScriptKind::File),
            ],
            prop::option::of("[a-z]{1,10}"),
            prop::collection::btree_map("[a-z_]{1,8}", json_value(), 0..4),
        )
            .prop_map(|(name, kind, lang, params)| Script {
                name,
                kind,
                lang,
                params,
            })
    }

    pub fn scroll_options() -> impl Strategy<Value = ScrollOptions> {
        (
            prop::collection::vec("[a-z][a-z0-9-]{0,12}", 1..4),
            prop::option::of(filter()),
            1usize..2_000,
            record_limit(),
            any::<bool>(),
            any::<bool>(),
            1u64..600_000,
            consistency(),
            prop::option::of(script()),
        )
            .prop_map(
                |(
                    indices,
                    filter,
                    page_size,
                    limit,
                    abort_on_version_conflict,
                    refresh,
                    timeout_ms,
                    consistency,
                    script,
                )| {
                    ScrollOptions {
                        query: ScrollQuery {
                            indices,
                            filter,
                            page_size,
                        },
                        limit,
                        abort_on_version_conflict,
                        refresh,
                        timeout: Duration::from_millis(timeout_ms),
                        consistency,
                        script,
                    }
                },
            )
    }

    pub fn indexing_failure() -> impl Strategy<Value = IndexingFailure> {
        (
            "[a-z-]{1,12}",
            "[a-z]{1,8}",
            "[a-z0-9]{1,8}",
            "[a-z ]{1,32}",
            400u16..600,
        )
            .prop_map(|(index, doc_type, id, message, status)| IndexingFailure {
                index,
                doc_type,
                id,
                message,
                status,
            })
    }

    pub fn search_failure() -> impl Strategy<Value = SearchFailure> {
        (
            "[a-z-]{1,12}",
            0u32..64,
            "[a-z0-9-]{1,12}",
            400u16..600,
            "[a-z ]{1,32}",
        )
            .prop_map(|(index, shard, node, status, reason)| SearchFailure {
                index,
                shard,
                node,
                status,
                reason,
            })
    }

    pub fn summary() -> impl Strategy<Value = BulkByScrollResponse> {
        (
            0u64..86_400_000,
            any::<u32>(),
            0u64..100_000,
            any::<u32>(),
            any::<u32>(),
            prop::collection::vec(indexing_failure(), 0..4),
            prop::collection::vec(search_failure(), 0..4),
        )
            .prop_map(
                |(
                    took_ms,
                    updated,
                    batches,
                    version_conflicts,
                    noops,
                    indexing_failures,
                    search_failures,
                )| {
                    BulkByScrollResponse {
                        took: Duration::from_millis(took_ms),
                        updated: updated as u64,
                        batches,
                        version_conflicts: version_conflicts as u64,
                        noops: noops as u64,
                        indexing_failures,
                        search_failures,
                    }
                },
            )
    }

    pub fn wire_message() -> impl Strategy<Value = WireMessage> {
        prop_oneof![
            (scroll_options(), "[a-z-]{1,12}", version_policy()).prop_map(
                |(options, index, version)| {
                    WireMessage::ReindexRequest(ReindexRequest::new(
                        options,
                        DestinationTemplate { index, version },
                    ))
                }
            ),
            scroll_options().prop_map(|options| {
                WireMessage::UpdateByQueryRequest(UpdateByQueryRequest::new(options))
            }),
            summary().prop_map(WireMessage::BulkByScrollResponse),
            (summary(), any::<u32>()).prop_map(|(summary, created)| {
                WireMessage::ReindexResponse(ReindexResponse {
                    created: created as u64,
                    summary,
                })
            }),
        ]
    }
}

proptest! {
    /// Property: every well-formed message survives the wire unchanged.
    #[test]
    fn any_message_survives_the_wire(message in strategies::wire_message()) {
        let bytes = wire::encode(&message).expect("encode");
        let decoded = wire::decode(&bytes).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    /// Property: the schema header is always the first two bytes.
    #[test]
    fn every_buffer_leads_with_the_schema_version(message in strategies::wire_message()) {
        let bytes = wire::encode(&message).expect("encode");
        let header = u16::from_le_bytes([bytes[0], bytes[1]]);
        prop_assert_eq!(header, wire::SCHEMA_VERSION);
    }

    /// Property: reindex and update-by-query requests never decode into
    /// each other even when their shared options are identical.
    #[test]
    fn operations_stay_distinct_on_the_wire(options in strategies::scroll_options()) {
        let reindex = WireMessage::ReindexRequest(ReindexRequest::new(
            options.clone(),
            DestinationTemplate::new("dest"),
        ));
        let update = WireMessage::UpdateByQueryRequest(UpdateByQueryRequest::new(options));

        let decoded_reindex = wire::decode(&wire::encode(&reindex).expect("encode")).expect("decode");
        let decoded_update = wire::decode(&wire::encode(&update).expect("encode")).expect("decode");

        prop_assert!(matches!(decoded_reindex, WireMessage::ReindexRequest(_)));
        prop_assert!(matches!(decoded_update, WireMessage::UpdateByQueryRequest(_)));
    }
}
