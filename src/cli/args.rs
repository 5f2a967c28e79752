//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Order;

/// Binary search tree playground: build a tree from values, walk, sort and rebalance it
#[derive(Parser, Debug)]
#[command(name = "bstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values inserted into the tree, in order
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Values to insert (duplicates are dropped)
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Rebalance after inserting
    #[arg(short, long)]
    pub balance: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a traversal of the tree
    Walk {
        #[command(flatten)]
        tree: TreeArgs,
        /// Traversal order (default from config)
        #[arg(short, long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Print the values in ascending order
    Sort {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Rebalance and print preorder and height
    Balance {
        /// Values to insert
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Draw the tree shape
    Show {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Remove a value and print the remaining preorder
    Remove {
        #[command(flatten)]
        tree: TreeArgs,
        /// Value to remove
        #[arg(short, long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Print the preorder position of a value
    Find {
        #[command(flatten)]
        tree: TreeArgs,
        /// Value to look up
        #[arg(short, long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal order as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Preorder,
    Inorder,
    Postorder,
    Level,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Preorder => Order::Preorder,
            OrderArg::Inorder => Order::Inorder,
            OrderArg::Postorder => Order::Postorder,
            OrderArg::Level => Order::Level,
        }
    }
}
