//! Folder tree building from flat parent-pointer records.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};
use uuid::Uuid;

use foldertree_entity::folder::{Folder, FolderNode};

/// Builds a forest from folders listed in creation order.
///
/// Sibling order follows input order at every level. A folder whose
/// `parent_id` matches no input folder is dropped along with its
/// descendants. Folders on a parent cycle are never reachable from a
/// top-level folder and are likewise absent from the output. Folders
/// nested deeper than `max_depth` (top-level folders sit at depth 0) are
/// cut off so the returned nodes stay shallow enough to walk recursively.
pub fn build_tree(folders: &[Folder], max_depth: usize) -> Vec<FolderNode> {
    let index: HashMap<Uuid, usize> = folders
        .iter()
        .enumerate()
        .map(|(pos, folder)| (folder.id, pos))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    let mut top_level = Vec::new();

    for (pos, folder) in folders.iter().enumerate() {
        match folder.parent_id {
            None => top_level.push(pos),
            Some(parent_id) => match index.get(&parent_id) {
                Some(&parent_pos) => children[parent_pos].push(pos),
                None => debug!(
                    folder_id = %folder.id,
                    parent_id = %parent_id,
                    "Dropping folder with dangling parent reference"
                ),
            },
        }
    }

    // Breadth-first from the top level; a parent is always visited before
    // its children, so walking the order backwards assembles leaves first.
    let mut order = Vec::with_capacity(folders.len());
    let mut queue: VecDeque<(usize, usize)> = top_level.iter().map(|&pos| (pos, 0)).collect();
    while let Some((pos, depth)) = queue.pop_front() {
        order.push(pos);
        if depth >= max_depth {
            if !children[pos].is_empty() {
                warn!(
                    folder_id = %folders[pos].id,
                    max_depth,
                    "Folder tree exceeds maximum depth, truncating"
                );
                children[pos].clear();
            }
            continue;
        }
        queue.extend(children[pos].iter().map(|&child| (child, depth + 1)));
    }

    let mut built: Vec<Option<FolderNode>> = vec![None; folders.len()];
    for &pos in order.iter().rev() {
        let mut node = FolderNode::from(&folders[pos]);
        node.children = children[pos]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[pos] = Some(node);
    }

    top_level
        .into_iter()
        .filter_map(|pos| built[pos].take())
        .collect()
}
