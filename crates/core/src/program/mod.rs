//! Hydrated, queryable program model.
//!
//! Built once from a [`varscope_api::ProgramModel`], then shared read-only by
//! every naming task. The only mutable parts are the per-method
//! [`MethodState`]s, each behind its own lock.

mod class;
mod closure;
mod hydrate;
mod method;
mod scope;

pub use class::{CAPTURED_LOCAL_PREFIX, ClassInfo, FieldInfo, OUTER_INSTANCE_PREFIX};
pub use closure::{ClosureInfo, ClosureScope};
pub use method::{LocalVariable, MethodCell, MethodDecl, MethodState};
pub use scope::ScopedNames;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet, VecDeque};
use varscope_api::{MethodRef, NameMapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClosureId(pub u32);

impl MethodId {
    fn node(self) -> NodeIndex {
        NodeIndex::new(self.0 as usize)
    }
}

#[derive(Debug)]
pub struct Program {
    classes: Vec<ClassInfo>,
    methods: Vec<MethodCell>,
    closures: Vec<ClosureInfo>,
    class_index: HashMap<String, ClassId>,
    method_index: HashMap<MethodRef, MethodId>,
    local_class_links: HashMap<ClassId, Vec<ClosureId>>,
    /// One node per method (node index == method id), one edge per inner -> outer link.
    closure_graph: DiGraph<MethodId, ClosureId>,
    name_mapping: NameMapping,
}

impl Program {
    pub fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }

    pub fn class(&self, id: ClassId) -> &ClassInfo {
        &self.classes[id.0 as usize]
    }

    pub fn class_by_name(&self, name: &str) -> Option<&ClassInfo> {
        self.class_index.get(name).map(|&id| self.class(id))
    }

    pub fn method(&self, id: MethodId) -> &MethodCell {
        &self.methods[id.0 as usize]
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodCell> {
        self.methods.iter()
    }

    pub fn method_id(&self, key: &MethodRef) -> Option<MethodId> {
        self.method_index.get(key).copied()
    }

    pub fn find_method(&self, owner: &str, name: &str, descriptor: &str) -> Option<&MethodCell> {
        self.method_id(&MethodRef::new(owner, name, descriptor))
            .map(|id| self.method(id))
    }

    pub fn closure(&self, id: ClosureId) -> &ClosureInfo {
        &self.closures[id.0 as usize]
    }

    pub fn closures(&self) -> &[ClosureInfo] {
        &self.closures
    }

    /// Lambda links where `method` is the lambda body, recursive self-links excluded.
    pub fn lambda_links_into(&self, method: MethodId) -> Vec<&ClosureInfo> {
        self.links_from(method)
            .into_iter()
            .filter(|c| c.is_lambda() && c.outer != method)
            .collect()
    }

    /// First local-class link of the class declaring `method`.
    pub fn local_class_link(&self, method: MethodId) -> Option<&ClosureInfo> {
        let class = self.method(method).decl().class;
        self.local_class_links
            .get(&class)
            .and_then(|ids| ids.first())
            .map(|&id| self.closure(id))
            .filter(|c| c.outer != method)
    }

    /// The lexical parent of `method`: a lambda link first, else its class's
    /// local-class link. Self-links never count as a parent.
    pub fn outer_link(&self, method: MethodId) -> Option<&ClosureInfo> {
        self.lambda_links_into(method)
            .into_iter()
            .next()
            .or_else(|| self.local_class_link(method))
    }

    /// Every closure whose enclosing method is `outer`, in link order.
    pub fn closures_enclosed_by(&self, outer: MethodId) -> Vec<&ClosureInfo> {
        let mut seen = HashSet::new();
        let mut ids: Vec<ClosureId> = self
            .closure_graph
            .edges_directed(outer.node(), Direction::Incoming)
            .map(|edge| *edge.weight())
            .filter(|id| seen.insert(*id))
            .collect();
        ids.sort();
        ids.into_iter().map(|id| self.closure(id)).collect()
    }

    fn links_from(&self, inner: MethodId) -> Vec<&ClosureInfo> {
        let mut ids: Vec<ClosureId> = self
            .closure_graph
            .edges_directed(inner.node(), Direction::Outgoing)
            .map(|edge| *edge.weight())
            .collect();
        ids.sort();
        ids.dedup();
        ids.into_iter().map(|id| self.closure(id)).collect()
    }

    /// Resolve a field by owner and name, walking known superclasses.
    pub fn find_field(&self, owner: &str, name: &str) -> Option<&FieldInfo> {
        let mut current = self.class_by_name(owner);
        while let Some(class) = current {
            if let Some(field) = class.fields.iter().find(|f| f.name == name) {
                return Some(field);
            }
            current = class
                .super_name
                .as_deref()
                .and_then(|s| self.class_by_name(s));
        }
        None
    }

    /// Names of the fields code inside `class` can refer to unqualified:
    /// its own fields plus visible inherited ones, capture fields excluded.
    pub fn visible_field_names(&self, class: ClassId) -> HashSet<String> {
        let class = self.class(class);
        let package = class.package();
        let mut names: HashSet<String> = class
            .fields
            .iter()
            .filter(|f| !f.is_capture_field())
            .map(|f| f.name.clone())
            .collect();

        let mut visited = HashSet::from([class.name.as_str()]);
        let mut current = class
            .super_name
            .as_deref()
            .and_then(|s| self.class_by_name(s));
        while let Some(parent) = current {
            if !visited.insert(parent.name.as_str()) {
                break;
            }
            names.extend(
                parent
                    .fields
                    .iter()
                    .filter(|f| !f.is_capture_field())
                    .filter(|f| f.is_inherited_into(parent.package(), package))
                    .map(|f| f.name.clone()),
            );
            current = parent
                .super_name
                .as_deref()
                .and_then(|s| self.class_by_name(s));
        }
        names
    }

    /// `name` and every supertype reachable through the model, breadth first.
    /// Supertypes outside the model appear as leaves.
    pub fn supertypes(&self, name: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([name.to_string()]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(class) = self.class_by_name(&current) {
                queue.extend(class.super_name.iter().cloned());
                queue.extend(class.interfaces.iter().cloned());
            }
            order.push(current);
        }
        order
    }
}
