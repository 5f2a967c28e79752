//! Tests for argument parsing and command helpers

use bstree::cli::args::TreeArgs;
use bstree::cli::commands::{build_tree, render_values};
use bstree::cli::{Cli, Commands, OrderArg};
use bstree::config::Settings;
use bstree::Order;
use clap::{CommandFactory, Parser};
use rstest::rstest;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn given_walk_with_negative_values_when_parsing_then_values_kept() {
    let cli = Cli::try_parse_from(["bstree", "walk", "3", "-1", "7", "--order", "level"]).unwrap();
    match cli.command {
        Some(Commands::Walk { tree, order }) => {
            assert_eq!(tree.values, vec![3, -1, 7]);
            assert_eq!(order, Some(OrderArg::Level));
            assert!(!tree.balance);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_repeated_debug_flag_when_parsing_then_counted() {
    let cli = Cli::try_parse_from(["bstree", "-d", "-d", "sort", "1"]).unwrap();
    assert_eq!(cli.debug, 2);
}

#[test]
fn given_remove_without_value_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["bstree", "remove", "1", "2"]).is_err());
}

#[rstest]
#[case(OrderArg::Preorder, Order::Preorder)]
#[case(OrderArg::Inorder, Order::Inorder)]
#[case(OrderArg::Postorder, Order::Postorder)]
#[case(OrderArg::Level, Order::Level)]
fn given_order_arg_when_converting_then_domain_order(#[case] arg: OrderArg, #[case] order: Order) {
    assert_eq!(Order::from(arg), order);
}

#[test]
fn given_balance_flag_when_building_then_rebalanced() {
    let args = TreeArgs {
        values: (0..=16).collect(),
        balance: true,
    };
    let settings = Settings::default();
    let tree = build_tree(&args, &settings);
    assert_eq!(
        render_values(tree.preorder(), &settings),
        "8, 4, 2, 1, 0, 3, 6, 5, 7, 13, 11, 10, 9, 12, 15, 14, 16"
    );
}
