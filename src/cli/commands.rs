use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, TreeArgs};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::{Order, SearchTree};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Walk { tree, order }) => {
            let order = order.map(Order::from).unwrap_or(settings.order);
            _walk(tree, order, settings)
        }
        Some(Commands::Sort { tree }) => _sort(tree, settings),
        Some(Commands::Balance { values }) => _balance(values, settings),
        Some(Commands::Show { tree }) => _show(tree, settings),
        Some(Commands::Remove { tree, value }) => _remove(tree, *value, settings),
        Some(Commands::Find { tree, value }) => _find(tree, *value, settings),
        Some(Commands::Config) => _config(settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Builds a tree from the command line values, rebalanced when either the
/// flag or the settings ask for it.
pub fn build_tree(args: &TreeArgs, settings: &Settings) -> SearchTree<i64> {
    let mut tree: SearchTree<i64> = args.values.iter().copied().collect();
    let dropped = args.values.len() - tree.len();
    if dropped > 0 {
        output::warning(&format!("{} duplicate value(s) dropped", dropped));
    }
    if args.balance || settings.balance {
        tree.balance();
    }
    tree
}

/// Joins values with the configured separator.
pub fn render_values<'a, I>(values: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a i64>,
{
    values.into_iter().join(&settings.separator)
}

#[instrument(skip(settings))]
fn _walk(args: &TreeArgs, order: Order, settings: &Settings) -> CliResult<()> {
    let tree = build_tree(args, settings);
    output::action(&order.to_string(), &render_values(tree.traverse(order), settings));
    Ok(())
}

#[instrument(skip(settings))]
fn _sort(args: &TreeArgs, settings: &Settings) -> CliResult<()> {
    let tree = build_tree(args, settings);
    output::info(&render_values(&tree.sort(), settings));
    Ok(())
}

#[instrument(skip(settings))]
fn _balance(values: &[i64], settings: &Settings) -> CliResult<()> {
    let mut tree: SearchTree<i64> = values.iter().copied().collect();
    let before = tree.height();
    tree.balance();
    debug!(before, after = tree.height(), "rebalanced");
    output::action("preorder", &render_values(tree.preorder(), settings));
    output::action("height", &format!("{} (was {})", tree.height(), before));
    Ok(())
}

#[instrument(skip(settings))]
fn _show(args: &TreeArgs, settings: &Settings) -> CliResult<()> {
    let tree = build_tree(args, settings);
    output::header(&format!("{} values, height {}", tree.len(), tree.height()));
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument(skip(settings))]
fn _remove(args: &TreeArgs, value: i64, settings: &Settings) -> CliResult<()> {
    let mut tree = build_tree(args, settings);
    if !tree.remove(&value) {
        output::warning(&format!("{} is not in the tree", value));
    }
    output::action("preorder", &render_values(tree.preorder(), settings));
    Ok(())
}

#[instrument(skip(settings))]
fn _find(args: &TreeArgs, value: i64, settings: &Settings) -> CliResult<()> {
    let tree = build_tree(args, settings);
    tree.find(&value)?;
    if let Some(index) = tree.index_of(&value) {
        output::action("index", &index);
    }
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[i64], balance: bool) -> TreeArgs {
        TreeArgs {
            values: values.to_vec(),
            balance,
        }
    }

    #[test]
    fn build_tree_drops_duplicates() {
        let tree = build_tree(&args(&[3, 1, 3], false), &Settings::default());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn build_tree_balances_on_setting() {
        let settings = Settings {
            balance: true,
            ..Settings::default()
        };
        let tree = build_tree(&args(&[1, 2, 3, 4, 5, 6, 7], false), &settings);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn render_uses_separator() {
        let settings = Settings {
            separator: " ".into(),
            ..Settings::default()
        };
        assert_eq!(render_values(&[1, 2, 3], &settings), "1 2 3");
    }
}
