//! Dispatcher behavior: resolution, transaction preparation, containment,
//! and the side effects of the mutating verbs.

mod common;

use common::{args, root_ctx, MockContext};
use quarry_dispatch::{standard_registry, Dispatcher};
use quarry_types::{DispatchError, MdPolicy};

fn dispatcher() -> Dispatcher {
    Dispatcher::new(standard_registry().expect("standard registry should build"))
}

#[test]
fn unknown_verb_is_a_distinct_fatal_error() {
    let mut ctx = root_ctx();
    let err = dispatcher()
        .dispatch(&mut ctx, "frobnicate", &[])
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnknownCommand(ref v) if v == "frobnicate"));
    assert!(ctx.calls.is_empty());
}

#[test]
fn near_miss_verbs_get_a_suggestion() {
    let dispatcher = dispatcher();
    assert_eq!(dispatcher.suggest("instal").as_deref(), Some("install"));
    assert!(dispatcher.suggest("zzzzzzzzzzzz").is_none());
}

#[test]
fn transaction_preparation_follows_the_command_declaration() {
    let dispatcher = dispatcher();

    // Verbs that need a transaction context prepared before execution.
    for (verb, argv) in [
        ("install", vec!["bash"]),
        ("update", vec![]),
        ("provides", vec!["libm"]),
        ("resolvedep", vec!["libm"]),
        ("deplist", vec!["bash"]),
        ("check-update", vec![]),
        ("groupinstall", vec!["tools"]),
    ] {
        let mut ctx = root_ctx();
        dispatcher.dispatch(&mut ctx, verb, &args(&argv)).unwrap();
        assert!(
            ctx.ran("prepare_transaction"),
            "'{verb}' should prepare a transaction"
        );
    }

    // Verbs that explicitly do without.
    for (verb, argv) in [
        ("erase", vec!["bash"]),
        ("search", vec!["editor"]),
        ("grouplist", vec![]),
        ("groupremove", vec!["tools"]),
        ("groupinfo", vec!["tools"]),
        ("makecache", vec![]),
        ("clean", vec!["all"]),
        ("localinstall", vec!["./pkg.rpm"]),
        ("shell", vec![]),
        ("repolist", vec![]),
    ] {
        let mut ctx = root_ctx();
        dispatcher.dispatch(&mut ctx, verb, &args(&argv)).unwrap();
        assert!(
            !ctx.ran("prepare_transaction"),
            "'{verb}' should not prepare a transaction"
        );
    }
}

#[test]
fn listing_only_installed_packages_skips_the_transaction() {
    let dispatcher = dispatcher();

    let mut ctx = root_ctx();
    dispatcher
        .dispatch(&mut ctx, "list", &args(&["installed"]))
        .unwrap();
    assert!(!ctx.ran("prepare_transaction"));

    let mut ctx = root_ctx();
    dispatcher
        .dispatch(&mut ctx, "list", &args(&["updates"]))
        .unwrap();
    assert!(ctx.ran("prepare_transaction"));
}

#[test]
fn failed_transaction_preparation_stops_the_dispatch() {
    let mut ctx = root_ctx();
    ctx.fail_op = Some("prepare_transaction");

    let result = dispatcher()
        .dispatch(&mut ctx, "install", &args(&["bash"]))
        .unwrap();

    assert_eq!(result.exit_code(), 1);
    assert!(!ctx.ran("install_packages"));
}

#[test]
fn leaked_backend_fault_is_contained_as_status_one() {
    // Clean delegates without translating; the dispatcher must contain the
    // fault instead of propagating it.
    let mut ctx = root_ctx();
    ctx.fail_op = Some("clean_caches");

    let result = dispatcher()
        .dispatch(&mut ctx, "clean", &args(&["packages"]))
        .unwrap();

    assert_eq!(result.exit_code(), 1);
    assert!(result.messages[0].contains("clean_caches exploded"));
}

#[test]
fn translated_backend_fault_becomes_an_error_result() {
    let mut ctx = root_ctx();
    ctx.fail_op = Some("install_packages");

    let result = dispatcher()
        .dispatch(&mut ctx, "install", &args(&["bash"]))
        .unwrap();

    assert_eq!(result.exit_code(), 1);
    assert!(result.messages[0].contains("install_packages exploded"));
}

#[test]
fn erase_and_remove_select_the_same_command() {
    let dispatcher = dispatcher();

    for verb in ["erase", "remove"] {
        let mut ctx = root_ctx();
        let result = dispatcher.dispatch(&mut ctx, verb, &args(&["bash"])).unwrap();
        assert_eq!(result.exit_code(), 2);
        assert!(ctx.ran("remove_packages"), "'{verb}' should delegate to remove");
    }
}

#[test]
fn upgrade_sets_the_obsoletes_flag_before_updating() {
    let mut ctx = root_ctx();
    assert!(!ctx.config.obsoletes);

    dispatcher().dispatch(&mut ctx, "upgrade", &[]).unwrap();

    assert!(ctx.config.obsoletes);
    assert!(ctx.ran("update_packages"));
}

#[test]
fn plain_update_leaves_the_obsoletes_flag_alone() {
    let mut ctx = root_ctx();
    dispatcher().dispatch(&mut ctx, "update", &[]).unwrap();
    assert!(!ctx.config.obsoletes);
}

#[test]
fn localupdate_selects_update_only_mode() {
    let dispatcher = dispatcher();

    let mut ctx = root_ctx();
    dispatcher
        .dispatch(&mut ctx, "localupdate", &args(&["./pkg.rpm"]))
        .unwrap();
    assert!(ctx.calls.iter().any(|c| c.contains("update_only=true")));

    let mut ctx = root_ctx();
    dispatcher
        .dispatch(&mut ctx, "localinstall", &args(&["./pkg.rpm"]))
        .unwrap();
    assert!(ctx.calls.iter().any(|c| c.contains("update_only=false")));
}

#[test]
fn clean_prefers_cached_data_and_passes_parsed_targets() {
    let mut ctx = root_ctx();
    let result = dispatcher()
        .dispatch(&mut ctx, "clean", &args(&["packages", "headers"]))
        .unwrap();

    assert_eq!(result.exit_code(), 0);
    assert!(ctx.config.cache_only);
    assert!(ctx.calls.iter().any(|c| c == "clean_caches(packages,headers)"));
}

#[test]
fn makecache_mutates_every_repo_before_the_enabled_only_sync() {
    let mut ctx = root_ctx();
    let result = dispatcher().dispatch(&mut ctx, "makecache", &[]).unwrap();

    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.messages, vec!["Metadata Cache Created".to_string()]);

    // By the time the sync ran, every repository, including the disabled
    // "source" repo, must already carry the maximal refresh settings.
    let snapshot = ctx.repos_at_sync.as_ref().expect("sync should have run");
    for repo in snapshot.iter() {
        assert_eq!(repo.metadata_expire, 0, "repo '{}' not expired", repo.id);
        assert_eq!(repo.md_policy, MdPolicy::GroupAll);
    }

    let ops = ctx.operations();
    let setup = ops.iter().position(|op| *op == "setup_repos").unwrap();
    let sync = ops.iter().position(|op| *op == "sync_metadata").unwrap();
    assert!(setup < sync, "repo setup must precede the metadata sync");
}

#[test]
fn makecache_sync_failure_is_reported() {
    let mut ctx = root_ctx();
    ctx.fail_op = Some("sync_metadata");

    let result = dispatcher().dispatch(&mut ctx, "makecache", &[]).unwrap();
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn group_verbs_run_the_shared_pre_step_first() {
    let dispatcher = dispatcher();

    for (verb, argv, op) in [
        ("grouplist", vec![], "group_lists"),
        ("groupinstall", vec!["tools"], "install_groups"),
        ("groupremove", vec!["tools"], "remove_groups"),
        ("groupinfo", vec!["tools"], "group_info"),
    ] {
        let mut ctx = root_ctx();
        dispatcher.dispatch(&mut ctx, verb, &args(&argv)).unwrap();

        let ops = ctx.operations();
        let setup_repos = ops.iter().position(|o| *o == "setup_repos").unwrap();
        let setup_groups = ops.iter().position(|o| *o == "setup_groups").unwrap();
        let group_op = ops.iter().position(|o| *o == op).unwrap();
        assert!(
            setup_repos < setup_groups && setup_groups < group_op,
            "'{verb}' ordering was {ops:?}"
        );
    }
}

#[test]
fn missing_group_metadata_has_its_own_message() {
    let mut ctx = MockContext::new();
    ctx.no_group_metadata = true;

    let result = dispatcher().dispatch(&mut ctx, "grouplist", &[]).unwrap();

    assert_eq!(result.exit_code(), 1);
    assert_eq!(result.messages, vec!["No Groups on which to run command".to_string()]);
    assert!(!ctx.ran("group_lists"), "group operation must not run");
}
