// SPDX-License-Identifier: MPL-2.0
//! Built-in navigation tree shown when no `--navigation` file is given.

use crate::ui::breadcrumbs::NavigationNode;

pub fn forest() -> Vec<NavigationNode> {
    vec![
        NavigationNode::new("home", "Home")
            .with_path("/")
            .with_icon("⌂")
            .with_children(vec![
                NavigationNode::new("library", "Library")
                    .with_path("/library")
                    .with_children(vec![
                        NavigationNode::new("books", "Books")
                            .with_path("/library/books")
                            .with_children(vec![
                                NavigationNode::new("fiction", "Fiction")
                                    .with_path("/library/books/fiction"),
                                NavigationNode::new("poetry", "Poetry")
                                    .with_path("/library/books/poetry")
                                    .with_children(vec![
                                        NavigationNode::new("sonnets", "Sonnets")
                                            .with_path("/library/books/poetry/sonnets"),
                                        NavigationNode::new("haiku", "Haiku")
                                            .with_path("/library/books/poetry/haiku"),
                                    ]),
                                NavigationNode::new("essays", "Essays")
                                    .with_path("/library/books/essays"),
                            ]),
                        NavigationNode::new("music", "Music").with_path("/library/music"),
                        // Grouping entry without a page of its own.
                        NavigationNode::new("archive", "Archive").with_children(vec![
                            NavigationNode::new("archive-2023", "2023")
                                .with_path("/library/archive/2023"),
                            NavigationNode::new("archive-2024", "2024")
                                .with_path("/library/archive/2024"),
                        ]),
                    ]),
                NavigationNode::new("settings", "Settings")
                    .with_path("/settings")
                    .with_children(vec![
                        NavigationNode::new("profile", "Profile").with_path("/settings/profile"),
                        NavigationNode::new("appearance", "Appearance")
                            .with_path("/settings/appearance"),
                    ]),
            ]),
        NavigationNode::new("help", "Help").with_path("/help"),
    ]
}

/// Picks the page the gallery opens on: the deepest path along first children.
#[must_use]
pub fn initial_path(forest: &[NavigationNode]) -> String {
    let mut current = forest.first();
    let mut path = None;
    while let Some(node) = current {
        if node.path.is_some() {
            path = node.path.clone();
        }
        current = node.children.first();
    }
    path.unwrap_or_else(|| "/".to_string())
}
