use super::MarkerInstance;
use crate::error::AnalysisError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Handle of a declaration inside an [`AnalysisUnit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeclId(pub usize);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
    Method,
    Parameter,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Method => "method",
            DeclKind::Parameter => "parameter",
        };
        write!(f, "{}", s)
    }
}

/// A class, method or parameter under analysis
#[derive(Debug, Clone)]
pub struct Declaration {
    pub id: DeclId,
    pub kind: DeclKind,
    /// Simple identifier (for classes, the qualified class name)
    pub name: String,
    pub enclosing: Option<DeclId>,
    /// Directly enclosed declarations: methods of a class, formal parameters of a method
    pub enclosed: Vec<DeclId>,
    pub markers: Vec<MarkerInstance>,
    /// Driver round in which a top-level declaration is first seen
    pub round: u32,
}

/// A marker type together with the meta-markers attached to the type itself
#[derive(Debug, Clone)]
pub struct MarkerType {
    pub qualified_name: String,
    pub meta_markers: Vec<MarkerInstance>,
}

/// Arena holding every declaration and marker type of one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisUnit {
    declarations: Vec<Declaration>,
    marker_types: HashMap<String, MarkerType>,
}

impl AnalysisUnit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the meta-markers of a marker type
    pub fn add_marker_type(
        &mut self,
        qualified_name: impl Into<String>,
        meta_markers: Vec<MarkerInstance>,
    ) {
        let qualified_name = qualified_name.into();
        self.marker_types.insert(
            qualified_name.clone(),
            MarkerType {
                qualified_name,
                meta_markers,
            },
        );
    }

    /// Meta-markers attached to the given marker type; unknown types have none
    #[must_use]
    pub fn meta_markers(&self, qualified_name: &str) -> &[MarkerInstance] {
        self.marker_types
            .get(qualified_name)
            .map(|t| t.meta_markers.as_slice())
            .unwrap_or(&[])
    }

    /// Add a declaration and link it into its enclosing declaration, if that exists
    pub fn add_declaration(
        &mut self,
        kind: DeclKind,
        name: impl Into<String>,
        enclosing: Option<DeclId>,
        markers: Vec<MarkerInstance>,
    ) -> DeclId {
        let id = DeclId(self.declarations.len());
        let round = enclosing
            .and_then(|parent| self.get(parent))
            .map(|parent| parent.round)
            .unwrap_or(0);
        self.declarations.push(Declaration {
            id,
            kind,
            name: name.into(),
            enclosing,
            enclosed: Vec::new(),
            markers,
            round,
        });
        if let Some(parent) = enclosing.and_then(|p| self.declarations.get_mut(p.0)) {
            parent.enclosed.push(id);
        }
        id
    }

    pub fn add_class(&mut self, name: impl Into<String>, markers: Vec<MarkerInstance>) -> DeclId {
        self.add_declaration(DeclKind::Class, name, None, markers)
    }

    pub fn add_interface(
        &mut self,
        name: impl Into<String>,
        markers: Vec<MarkerInstance>,
    ) -> DeclId {
        self.add_declaration(DeclKind::Interface, name, None, markers)
    }

    pub fn add_method(
        &mut self,
        owner: DeclId,
        name: impl Into<String>,
        markers: Vec<MarkerInstance>,
    ) -> DeclId {
        self.add_declaration(DeclKind::Method, name, Some(owner), markers)
    }

    pub fn add_parameter(
        &mut self,
        method: DeclId,
        name: impl Into<String>,
        markers: Vec<MarkerInstance>,
    ) -> DeclId {
        self.add_declaration(DeclKind::Parameter, name, Some(method), markers)
    }

    /// Move a top-level declaration and everything it encloses to another round
    pub fn set_round(&mut self, id: DeclId, round: u32) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(decl) = self.declarations.get_mut(next.0) {
                decl.round = round;
                pending.extend(decl.enclosed.iter().copied().filter(|c| *c > next));
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.0)
    }

    /// Look up a declaration, failing if the handle is dangling
    pub fn declaration(&self, id: DeclId) -> Result<&Declaration, AnalysisError> {
        self.get(id).ok_or(AnalysisError::UnknownDeclaration(id))
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Human readable location, e.g. `com.example.UserController#get(id)`
    #[must_use]
    pub fn label(&self, id: DeclId) -> String {
        let Some(decl) = self.get(id) else {
            return format!("<unknown declaration {}>", id);
        };
        let parent = decl.enclosing.and_then(|p| self.get(p));
        match decl.kind {
            DeclKind::Class | DeclKind::Interface => decl.name.clone(),
            DeclKind::Method => match parent {
                Some(owner) => format!("{}#{}", owner.name, decl.name),
                None => decl.name.clone(),
            },
            DeclKind::Parameter => match parent {
                Some(method) => match method.enclosing.and_then(|p| self.get(p)) {
                    Some(owner) => format!("{}#{}({})", owner.name, method.name, decl.name),
                    None => format!("{}({})", method.name, decl.name),
                },
                None => decl.name.clone(),
            },
        }
    }
}
