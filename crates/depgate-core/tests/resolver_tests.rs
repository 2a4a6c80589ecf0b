//! Tests for flag derivation and the per-target evaluation pass

use depgate_core::{
    Catalog, DEFAULT_MODULE, DependencySet, FeatureMapping, Partition, Predicate, TargetConfig,
    TargetEvaluation, TargetKind, derive, exists,
};
use rstest::rstest;

fn no_deps() -> Vec<String> {
    Vec::new()
}

mod single_dependency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mongo_c_present_in_private() {
        let catalog =
            Catalog::new(vec![FeatureMapping::single("MongoC", "SL_WITH_LIBMONGO_C")]).unwrap();
        let deps = DependencySet::from_partitions(no_deps(), ["Core", "MongoC"]);

        assert_eq!(derive(&catalog, &deps).value("SL_WITH_LIBMONGO_C"), Some(1));
    }

    #[test]
    fn test_mongo_c_absent() {
        let catalog =
            Catalog::new(vec![FeatureMapping::single("MongoC", "SL_WITH_LIBMONGO_C")]).unwrap();
        let deps = DependencySet::from_partitions(no_deps(), ["Core"]);

        assert_eq!(derive(&catalog, &deps).value("SL_WITH_LIBMONGO_C"), Some(0));
    }

    #[rstest]
    #[case(Partition::Public)]
    #[case(Partition::Private)]
    fn test_either_partition_enables_flag(#[case] partition: Partition) {
        let catalog =
            Catalog::new(vec![FeatureMapping::single("UROSBridge", "SL_WITH_ROSBRIDGE")]).unwrap();
        let mut deps = DependencySet::new();
        deps.insert(partition, "UROSBridge");

        assert!(exists("UROSBridge", &deps));
        assert!(derive(&catalog, &deps).is_enabled("SL_WITH_ROSBRIDGE"));
    }

    #[test]
    fn test_prefix_of_dependency_does_not_match() {
        let catalog =
            Catalog::new(vec![FeatureMapping::single("MongoC", "SL_WITH_LIBMONGO_C")]).unwrap();
        let deps = DependencySet::from_partitions(["MongoCxx"], ["mongoc"]);

        assert_eq!(derive(&catalog, &deps).value("SL_WITH_LIBMONGO_C"), Some(0));
    }
}

mod compound {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data_vis() -> Catalog {
        Catalog::new(vec![FeatureMapping::all(
            ["UViz", "UMongoQA"],
            "SL_WITH_DATA_VIS",
        )])
        .unwrap()
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&["UViz"], 0)]
    #[case(&["UMongoQA"], 0)]
    #[case(&["UViz", "UMongoQA"], 1)]
    #[case(&["UMongoQA", "Core", "UViz"], 1)]
    fn test_data_vis_requires_both(#[case] names: &[&str], #[case] expected: u8) {
        let deps = DependencySet::from_partitions(no_deps(), names.iter().copied());
        assert_eq!(derive(&data_vis(), &deps).value("SL_WITH_DATA_VIS"), Some(expected));
    }

    #[test]
    fn test_names_split_across_partitions() {
        let deps = DependencySet::from_partitions(["UViz"], ["UMongoQA"]);
        assert_eq!(derive(&data_vis(), &deps).value("SL_WITH_DATA_VIS"), Some(1));
    }
}

mod builtin {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_full_plugin_target() {
        let deps = DependencySet::from_partitions(
            ["Core", "CoreUObject", "Engine", "UConversions"],
            [
                "MongoC",
                "SRanipal",
                "UMCGrasp",
                "UROSBridge",
                "Json",
                "JsonUtilities",
                "UViz",
            ],
        );

        let flags = derive(&Catalog::builtin_for(DEFAULT_MODULE).unwrap(), &deps);

        assert_eq!(
            flags.definitions(),
            vec![
                "SL_WITH_DATA_VIS=0",
                "SL_WITH_EYE_TRACKING=1",
                "SL_WITH_JSON=1",
                "SL_WITH_LIBMONGO_C=1",
                "SL_WITH_LIBMONGO_CXX=0",
                "SL_WITH_MC_GRASP=1",
                "SL_WITH_PROTO_MSGS=0",
                "SL_WITH_ROSBRIDGE=1",
                "SL_WITH_ROS_CONVERSIONS=1",
                "SL_WITH_SLICING=0",
            ]
        );
    }
}

mod evaluation {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor_only() -> Predicate {
        Predicate::All(vec![
            Predicate::Kind(TargetKind::Editor),
            Predicate::Toggle("includeEditorOnlyDeps".into()),
        ])
    }

    fn editor_catalog() -> Catalog {
        Catalog::new(vec![FeatureMapping::single(
            "SemLogEd",
            "SL_WITH_EDITOR_TOOLKIT",
        )])
        .unwrap()
    }

    #[rstest]
    #[case(TargetKind::Editor, true, 1)]
    #[case(TargetKind::Editor, false, 0)]
    #[case(TargetKind::Game, true, 0)]
    #[case(TargetKind::Program, true, 0)]
    #[case(TargetKind::Client, true, 0)]
    fn test_editor_only_dependency_gates_flag(
        #[case] kind: TargetKind,
        #[case] toggle: bool,
        #[case] expected: u8,
    ) {
        let target = TargetConfig::new(kind).with_toggle("includeEditorOnlyDeps", toggle);

        let flags = TargetEvaluation::new(target, DependencySet::from_partitions(["Core"], no_deps()))
            .include_if(&editor_only(), Partition::Private, "SemLogEd")
            .resolve(&editor_catalog());

        assert_eq!(flags.value("SL_WITH_EDITOR_TOOLKIT"), Some(expected));
    }

    #[test]
    fn test_closure_condition() {
        let target = TargetConfig::new(TargetKind::Server);
        let catalog =
            Catalog::new(vec![FeatureMapping::single("UProtoMsgs", "SL_WITH_PROTO_MSGS")]).unwrap();

        let flags = TargetEvaluation::new(target, DependencySet::new())
            .include_if(
                &|t: &TargetConfig| t.kind == TargetKind::Server,
                Partition::Public,
                "UProtoMsgs",
            )
            .resolve(&catalog);

        assert!(flags.is_enabled("SL_WITH_PROTO_MSGS"));
    }

    #[test]
    fn test_explain_after_inclusion() {
        let target = TargetConfig::new(TargetKind::Editor).with_toggle("includeEditorOnlyDeps", true);

        let explanations = TargetEvaluation::new(target, DependencySet::new())
            .include_if(&editor_only(), Partition::Private, "SemLogEd")
            .explain(&editor_catalog());

        assert_eq!(explanations.len(), 1);
        assert!(explanations[0].enabled);
        assert!(explanations[0].missing.is_empty());
    }
}
