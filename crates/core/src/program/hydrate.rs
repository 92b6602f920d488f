use super::class::{ClassInfo, FieldInfo};
use super::closure::{ClosureInfo, ClosureScope};
use super::method::{LocalVariable, MethodCell, MethodDecl, MethodState};
use super::{ClassId, ClosureId, MethodId, Program};
use crate::descriptor::{JavaType, MethodSignature};
use crate::error::{Result, VarscopeError};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::DiGraph;
use ristretto_classfile::MethodAccessFlags;
use std::collections::HashMap;
use tracing::{debug, warn};
use varscope_api::{
    ClassModel, ClosureLink, ClosureTarget, FieldModel, Instruction, LocalVariableEntry,
    MethodModel, MethodRef, NameMapping, ProgramModel,
};

impl Program {
    /// Index a program model and validate its internal references.
    pub fn hydrate(model: ProgramModel) -> Result<Self> {
        let ProgramModel {
            classes: class_models,
            closures: links,
            name_mapping,
        } = model;

        let mut declared = parse_name_mapping(&name_mapping)?;

        let mut classes = Vec::with_capacity(class_models.len());
        let mut methods = Vec::new();
        let mut class_index = HashMap::new();
        let mut method_index = HashMap::new();
        let mut closure_graph = DiGraph::new();

        for (ci, class_model) in class_models.into_iter().enumerate() {
            let class_id = ClassId(ci as u32);
            let ClassModel {
                name,
                access,
                kind,
                super_name,
                interfaces,
                record_components,
                fields,
                methods: method_models,
            } = class_model;

            if class_index.insert(name.clone(), class_id).is_some() {
                return Err(VarscopeError::Model(format!("duplicate class {name}")));
            }

            let mut method_ids = Vec::with_capacity(method_models.len());
            for method_model in method_models {
                let id = MethodId(methods.len() as u32);
                let key = MethodRef::new(&name, &method_model.name, &method_model.descriptor);
                if method_index.insert(key.clone(), id).is_some() {
                    return Err(VarscopeError::Model(format!("duplicate method {key}")));
                }
                let declared_names = declared.remove(&key).unwrap_or_default();
                let (decl, state) =
                    hydrate_method(id, class_id, key, method_model, declared_names)?;
                methods.push(MethodCell::new(decl, state));
                closure_graph.add_node(id);
                method_ids.push(id);
            }

            classes.push(ClassInfo {
                id: class_id,
                name,
                access,
                kind,
                super_name,
                interfaces,
                record_components,
                fields: fields
                    .into_iter()
                    .map(|FieldModel { name, descriptor, access }| FieldInfo {
                        name,
                        descriptor,
                        access,
                    })
                    .collect(),
                methods: method_ids,
            });
        }

        for key in declared.keys() {
            warn!("name mapping refers to unknown method {}", key);
        }

        let mut program = Program {
            classes,
            methods,
            closures: Vec::with_capacity(links.len()),
            class_index,
            method_index,
            local_class_links: HashMap::new(),
            closure_graph,
            name_mapping,
        };

        for (i, link) in links.into_iter().enumerate() {
            program.add_closure(ClosureId(i as u32), link)?;
        }
        program.check_acyclic()?;

        debug!(
            "hydrated {} classes, {} methods, {} closure links",
            program.classes.len(),
            program.methods.len(),
            program.closures.len()
        );
        Ok(program)
    }

    fn add_closure(&mut self, id: ClosureId, link: ClosureLink) -> Result<()> {
        let outer = self.method_id(&link.outer).ok_or_else(|| {
            VarscopeError::Model(format!("closure outer method {} is not in the model", link.outer))
        })?;
        if let Some(site) = link.site {
            let len = self.method(outer).decl().instructions.len();
            if site >= len {
                return Err(VarscopeError::Model(format!(
                    "closure site {site} is outside {} ({len} instructions)",
                    link.outer
                )));
            }
        }

        let (scope, members) = match &link.target {
            ClosureTarget::Lambda { method } => {
                let inner = self.method_id(method).ok_or_else(|| {
                    VarscopeError::Model(format!("lambda body {method} is not in the model"))
                })?;
                (ClosureScope::Lambda(inner), vec![inner])
            }
            ClosureTarget::LocalClass { class } => {
                let class_id = self.class_index.get(class).copied().ok_or_else(|| {
                    VarscopeError::Model(format!("local class {class} is not in the model"))
                })?;
                self.local_class_links.entry(class_id).or_default().push(id);
                (
                    ClosureScope::LocalClass(class_id),
                    self.class(class_id).methods.clone(),
                )
            }
        };

        let receivers = match scope {
            ClosureScope::Lambda(inner) => vec![inner],
            ClosureScope::LocalClass(_) => members
                .iter()
                .copied()
                .filter(|&m| self.method(m).decl().is_constructor())
                .collect(),
        };

        for member in members {
            self.closure_graph.add_edge(member.node(), outer.node(), id);
        }
        self.closures.push(ClosureInfo {
            id,
            link,
            outer,
            scope,
            receivers,
        });
        Ok(())
    }

    /// Self-links are allowed (recursive lambdas); any longer cycle is not.
    fn check_acyclic(&self) -> Result<()> {
        for component in kosaraju_scc(&self.closure_graph) {
            if component.len() > 1 {
                let names: Vec<String> = component
                    .iter()
                    .map(|n| self.methods[n.index()].decl().key.to_string())
                    .collect();
                return Err(VarscopeError::Model(format!(
                    "closure links form a cycle: {}",
                    names.join(" -> ")
                )));
            }
        }
        Ok(())
    }

    /// Export the model with every name decided so far written back.
    pub fn to_model(&self) -> Result<ProgramModel> {
        let mut classes = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            let mut methods = Vec::with_capacity(class.methods.len());
            for &id in &class.methods {
                let cell = self.method(id);
                let decl = cell.decl();
                let state = cell.snapshot()?;
                methods.push(MethodModel {
                    name: decl.key.name.clone(),
                    descriptor: decl.key.descriptor.clone(),
                    access: decl.access,
                    instructions: decl.instructions.clone(),
                    local_variables: decl
                        .locals
                        .iter()
                        .map(|local| LocalVariableEntry {
                            slot: local.slot,
                            descriptor: local.descriptor.clone(),
                            start: label_at(decl, local.start),
                            end: label_at(decl, local.end),
                            name: state
                                .local_names
                                .get(local.index)
                                .cloned()
                                .flatten()
                                .or_else(|| local.original_name.clone()),
                        })
                        .collect(),
                    parameters: state.parameter_names.clone(),
                });
            }
            classes.push(ClassModel {
                name: class.name.clone(),
                access: class.access,
                kind: class.kind,
                super_name: class.super_name.clone(),
                interfaces: class.interfaces.clone(),
                record_components: class.record_components.clone(),
                fields: class
                    .fields
                    .iter()
                    .map(|f| FieldModel {
                        name: f.name.clone(),
                        descriptor: f.descriptor.clone(),
                        access: f.access,
                    })
                    .collect(),
                methods,
            });
        }

        Ok(ProgramModel {
            classes,
            closures: self.closures.iter().map(|c| c.link.clone()).collect(),
            name_mapping: self.name_mapping.clone(),
        })
    }
}

fn parse_name_mapping(mapping: &NameMapping) -> Result<HashMap<MethodRef, HashMap<u16, String>>> {
    mapping
        .methods
        .iter()
        .map(|(key, slots)| {
            let method: MethodRef = key.parse()?;
            let slots = slots.iter().map(|(&s, n)| (s, n.clone())).collect();
            Ok((method, slots))
        })
        .collect()
}

fn hydrate_method(
    id: MethodId,
    class: ClassId,
    key: MethodRef,
    model: MethodModel,
    declared_names: HashMap<u16, String>,
) -> Result<(MethodDecl, MethodState)> {
    let MethodModel {
        access,
        instructions,
        local_variables,
        parameters,
        ..
    } = model;

    let signature = MethodSignature::parse(&key.descriptor)?;
    let is_static = MethodAccessFlags::from_bits_truncate(access).contains(MethodAccessFlags::STATIC);
    let parameter_slots = signature.parameter_slots(is_static);

    let mut labels = HashMap::new();
    for (index, insn) in instructions.iter().enumerate() {
        if let Instruction::Label { id: label } = insn {
            if labels.insert(*label, index).is_some() {
                return Err(VarscopeError::Model(format!("duplicate label {label} in {key}")));
            }
        }
    }
    let entry_index = instructions
        .iter()
        .position(|insn| !insn.is_marker())
        .unwrap_or(instructions.len());

    let mut locals = Vec::with_capacity(local_variables.len());
    for (index, entry) in local_variables.into_iter().enumerate() {
        let resolve = |label: u32| {
            labels.get(&label).copied().ok_or_else(|| {
                VarscopeError::Model(format!(
                    "local variable {index} of {key} references missing label {label}"
                ))
            })
        };
        let start = resolve(entry.start)?;
        let end = resolve(entry.end)?;
        if start > end {
            return Err(VarscopeError::Model(format!(
                "local variable {index} of {key} ends before it starts"
            )));
        }
        JavaType::parse(&entry.descriptor)?;
        locals.push(LocalVariable {
            index,
            slot: entry.slot,
            descriptor: entry.descriptor,
            start,
            end,
            original_name: entry.name,
        });
    }

    let mut parameter_names = parameters;
    parameter_names.resize(signature.parameters.len(), None);

    let state = MethodState {
        local_names: locals.iter().map(|l| l.original_name.clone()).collect(),
        parameter_names,
        ..MethodState::default()
    };

    let decl = MethodDecl {
        id,
        class,
        key,
        access,
        signature,
        parameter_slots,
        instructions,
        locals,
        declared_names,
        entry_index,
    };
    Ok((decl, state))
}

/// Label id at instruction `index`; hydration guarantees one exists for table bounds.
fn label_at(decl: &MethodDecl, index: usize) -> u32 {
    match decl.instructions.get(index) {
        Some(Instruction::Label { id }) => *id,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varscope_api::{ClassKind, SlotCapture};

    fn method(name: &str, descriptor: &str, access: u16) -> MethodModel {
        MethodModel {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access,
            instructions: vec![
                Instruction::Label { id: 0 },
                Instruction::Return,
                Instruction::Label { id: 1 },
            ],
            local_variables: vec![],
            parameters: vec![],
        }
    }

    fn class(name: &str, methods: Vec<MethodModel>) -> ClassModel {
        ClassModel {
            name: name.to_string(),
            access: 0,
            kind: ClassKind::Class,
            super_name: Some("java/lang/Object".to_string()),
            interfaces: vec![],
            record_components: vec![],
            fields: vec![],
            methods,
        }
    }

    fn lambda_link(inner: &str, outer: &str) -> ClosureLink {
        ClosureLink {
            target: ClosureTarget::Lambda {
                method: MethodRef::new("a/A", inner, "()V"),
            },
            outer: MethodRef::new("a/A", outer, "()V"),
            captures: vec![SlotCapture { inner: 0, outer: 1 }],
            site: None,
        }
    }

    #[test]
    fn test_missing_label_is_model_error() {
        let mut m = method("run", "()V", 0);
        m.local_variables.push(LocalVariableEntry {
            slot: 0,
            descriptor: "La/A;".to_string(),
            start: 0,
            end: 7,
            name: None,
        });
        let model = ProgramModel {
            classes: vec![class("a/A", vec![m])],
            ..ProgramModel::default()
        };
        let err = Program::hydrate(model).unwrap_err();
        assert!(matches!(err, VarscopeError::Model(_)));
    }

    #[test]
    fn test_unknown_closure_target_is_model_error() {
        let model = ProgramModel {
            classes: vec![class("a/A", vec![method("outer", "()V", 0)])],
            closures: vec![lambda_link("lambda$outer$0", "outer")],
            ..ProgramModel::default()
        };
        assert!(matches!(
            Program::hydrate(model).unwrap_err(),
            VarscopeError::Model(_)
        ));
    }

    #[test]
    fn test_self_link_is_allowed_but_not_an_outer() {
        let model = ProgramModel {
            classes: vec![class("a/A", vec![method("lambda$f$0", "()V", 0x1008)])],
            closures: vec![lambda_link("lambda$f$0", "lambda$f$0")],
            ..ProgramModel::default()
        };
        let program = Program::hydrate(model).unwrap();
        let id = program
            .method_id(&MethodRef::new("a/A", "lambda$f$0", "()V"))
            .unwrap();
        assert!(program.outer_link(id).is_none());
    }

    #[test]
    fn test_cycle_is_rejected() {
        let model = ProgramModel {
            classes: vec![class(
                "a/A",
                vec![method("a", "()V", 0), method("b", "()V", 0)],
            )],
            closures: vec![lambda_link("a", "b"), lambda_link("b", "a")],
            ..ProgramModel::default()
        };
        assert!(matches!(
            Program::hydrate(model).unwrap_err(),
            VarscopeError::Model(_)
        ));
    }

    #[test]
    fn test_outer_link_and_siblings() {
        let model = ProgramModel {
            classes: vec![class(
                "a/A",
                vec![
                    method("outer", "()V", 0),
                    method("lambda$outer$0", "()V", 0x1008),
                    method("lambda$outer$1", "()V", 0x1008),
                ],
            )],
            closures: vec![
                lambda_link("lambda$outer$0", "outer"),
                lambda_link("lambda$outer$1", "outer"),
            ],
            ..ProgramModel::default()
        };
        let program = Program::hydrate(model).unwrap();
        let outer = program
            .method_id(&MethodRef::new("a/A", "outer", "()V"))
            .unwrap();
        let inner = program
            .method_id(&MethodRef::new("a/A", "lambda$outer$1", "()V"))
            .unwrap();

        assert_eq!(program.outer_link(inner).unwrap().outer, outer);
        assert_eq!(program.closures_enclosed_by(outer).len(), 2);
    }

    #[test]
    fn test_to_model_round_trips_structure() {
        let model = ProgramModel {
            classes: vec![class("a/A", vec![method("run", "(IJ)V", 0x0008)])],
            ..ProgramModel::default()
        };
        let program = Program::hydrate(model).unwrap();
        let out = program.to_model().unwrap();
        assert_eq!(out.classes[0].methods[0].parameters, vec![None, None]);
        assert_eq!(out.classes[0].methods[0].instructions.len(), 3);
    }
}
