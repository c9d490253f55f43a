use crate::model::ChainLink;
use cutil::str::capitalize;

pub const PATH_SEPARATOR: &str = " --> ";

/// One species in an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub name: String,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.children.push(child);
        self
    }
}

impl From<&ChainLink> for EvolutionNode {
    fn from(link: &ChainLink) -> Self {
        Self {
            name: capitalize(&link.species.name),
            children: link.evolves_to.iter().map(EvolutionNode::from).collect(),
        }
    }
}

/// Every root-to-leaf path, in the order the leaves are reached by a
/// depth-first walk over the children as listed.
pub fn resolve_paths(root: &EvolutionNode) -> Vec<Vec<String>> {
    let mut paths = vec![];
    walk(root, vec![], &mut paths);
    paths
}

/// [`resolve_paths`] with each path joined by [`PATH_SEPARATOR`].
pub fn resolve_chain(root: &EvolutionNode) -> Vec<String> {
    resolve_paths(root)
        .into_iter()
        .map(|path| path.join(PATH_SEPARATOR))
        .collect()
}

// Each branch owns its trail, siblings never see each other's names.
fn walk(node: &EvolutionNode, mut trail: Vec<String>, paths: &mut Vec<Vec<String>>) {
    trail.push(node.name.clone());

    if node.children.is_empty() {
        paths.push(trail);
        return;
    }

    for child in &node.children {
        walk(child, trail.clone(), paths);
    }
}
