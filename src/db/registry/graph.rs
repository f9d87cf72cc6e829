/*!
The graph of references between bound names.

Each bound name is a node, with an edge from the name to each name referred to by the node bound to the name.
Names which are referred to, but are not bound, are also nodes (without any outgoing edges).

A traversal of a formula terminates only if the names reachable from the formula do not form a cycle.
Traversals are bounded by a [depth limit](crate::config::dbs::RegistryConfig::depth_limit), and the graph offers a way to identify the names involved ahead of any traversal.
*/

use std::collections::HashMap;

use petgraph::{
    algo::tarjan_scc,
    graph::{DiGraph, NodeIndex},
};

use crate::{db::registry::Registry, structures::name::Name};

impl Registry {
    /// The graph of references between names, with each node weighted by its name.
    pub fn reference_graph(&self) -> DiGraph<Name, ()> {
        let mut graph = DiGraph::new();
        let mut indicies: HashMap<Name, NodeIndex> = HashMap::default();

        for name in 0..self.bindings.len() {
            let Some((_, formula)) = self.resolve(name) else {
                continue;
            };
            let from = *indicies
                .entry(name)
                .or_insert_with(|| graph.add_node(name));

            for reference in formula.references() {
                let to = *indicies
                    .entry(reference)
                    .or_insert_with(|| graph.add_node(reference));
                graph.update_edge(from, to, ());
            }
        }

        graph
    }

    /// Every name which lies on some cycle of references, sorted.
    ///
    /// Simplification or evaluation of any formula from which one of these names is reachable will exceed the depth limit.
    pub fn cyclic_names(&self) -> Vec<String> {
        let graph = self.reference_graph();

        let mut names = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| match component.as_slice() {
                [single] => graph.contains_edge(*single, *single),
                _ => true,
            })
            .flatten()
            .map(|index| self.name_str(graph[index]).to_string())
            .collect::<Vec<_>>();

        names.sort_unstable();
        names
    }
}
