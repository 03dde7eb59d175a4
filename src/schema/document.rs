use super::domain::DomainModel;
use super::flow::Flow;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// The top-level output document: one extraction run over one model.
///
/// The document is assembled once, owns its whole tree exclusively and is
/// immutable afterwards. Field declaration order fixes the JSON key order,
/// which must stay stable so that documents of the same model diff cleanly.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub project_name: String,
    pub extracted_at: String,
    pub project_security: ProjectSecurity,
    pub modules: Vec<Module>,
}

impl Document {
    /// Assembles a document, stamping it with the current UTC time.
    pub fn new(project_name: String, project_security: ProjectSecurity, modules: Vec<Module>) -> Self {
        Self {
            project_name,
            extracted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            project_security,
            modules,
        }
    }

    /// Serializes the document to pretty-printed JSON, ready for the shell
    /// to persist verbatim.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Project-wide security settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSecurity {
    pub security_level: String,
    pub check_security: bool,
    pub user_roles: Vec<UserRole>,
}

impl ProjectSecurity {
    /// The valid, common state of a model with no security configured.
    pub fn none() -> Self {
        Self {
            security_level: "none".to_string(),
            check_security: false,
            user_roles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub name: String,
    pub description: String,
    pub module_roles: Vec<String>,
}

/// One extracted module. `security` is null when the module declares none.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    pub domain_model: DomainModel,
    pub microflows: Vec<Flow>,
    pub security: Option<ModuleSecurity>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSecurity {
    pub module_roles: Vec<ModuleRole>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRole {
    pub name: String,
    pub documentation: String,
}
