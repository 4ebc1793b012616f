//! Owned, serde-friendly mirror of the AST
//!
//! Trees arrive from an upstream parser as JSON or YAML documents in which
//! every node carries a `kind` tag:
//!
//! ```json
//! { "command": { "kind": "while",
//!                "condition": { "kind": "var", "name": "go" },
//!                "body": { "kind": "assign",
//!                          "target": { "kind": "simple", "name": "x" },
//!                          "value": { "kind": "integer", "value": 1 } } } }
//! ```
//!
//! [`ProgramNode::lower`] copies such a document into an arena, producing
//! the borrowed tree the optimiser works on.

use crate::ast::*;
use crate::errors::CompilationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramNode {
    pub command: CommandNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandNode {
    Assign {
        target: VnameNode,
        value: ExpressionNode,
    },
    Call {
        procedure: String,
        #[serde(default)]
        arguments: Vec<ActualParameterNode>,
    },
    Empty,
    If {
        condition: ExpressionNode,
        then_branch: Box<CommandNode>,
        else_branch: Box<CommandNode>,
    },
    Let {
        declaration: DeclarationNode,
        body: Box<CommandNode>,
    },
    /// `c1; c2; ...`, nested to the right when lowered
    Sequential { commands: Vec<CommandNode> },
    While {
        condition: ExpressionNode,
        body: Box<CommandNode>,
    },
}

/// An integer literal written either as a number or as its spelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerValue {
    Number(i64),
    Spelling(String),
}

impl IntegerValue {
    fn spelling(&self) -> Result<String, CompilationError> {
        let spelling = match self {
            IntegerValue::Number(n) => n.to_string(),
            IntegerValue::Spelling(s) => s.clone(),
        };
        if spelling.is_empty() || !spelling.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CompilationError::InterchangeError(format!(
                "'{}' is not an integer literal",
                spelling
            )));
        }
        Ok(spelling)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpressionNode {
    Empty,
    Integer {
        value: IntegerValue,
    },
    Character {
        value: char,
    },
    Vname {
        vname: VnameNode,
    },
    /// Shorthand for reading a simple variable
    Var {
        name: String,
    },
    Unary {
        operator: String,
        operand: Box<ExpressionNode>,
    },
    Binary {
        operator: String,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
    If {
        condition: Box<ExpressionNode>,
        then_branch: Box<ExpressionNode>,
        else_branch: Box<ExpressionNode>,
    },
    Let {
        declaration: Box<DeclarationNode>,
        body: Box<ExpressionNode>,
    },
    Call {
        function: String,
        #[serde(default)]
        arguments: Vec<ActualParameterNode>,
    },
    Array {
        elements: Vec<ExpressionNode>,
    },
    Record {
        fields: Vec<RecordFieldNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFieldNode {
    pub name: String,
    pub value: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VnameNode {
    Simple {
        name: String,
    },
    Dot {
        base: Box<VnameNode>,
        field: String,
    },
    Subscript {
        base: Box<VnameNode>,
        index: Box<ExpressionNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationNode {
    Const {
        name: String,
        value: ExpressionNode,
    },
    Var {
        name: String,
        #[serde(rename = "type")]
        ty: TypeNode,
    },
    Proc {
        name: String,
        #[serde(default)]
        parameters: Vec<FormalParameterNode>,
        body: Box<CommandNode>,
    },
    Func {
        name: String,
        #[serde(default)]
        parameters: Vec<FormalParameterNode>,
        result: TypeNode,
        body: Box<ExpressionNode>,
    },
    Type {
        name: String,
        #[serde(rename = "type")]
        ty: TypeNode,
    },
    UnaryOperator {
        operator: String,
        argument: TypeNode,
        result: TypeNode,
    },
    BinaryOperator {
        operator: String,
        left: TypeNode,
        right: TypeNode,
        result: TypeNode,
    },
    /// `d1; d2; ...`, nested to the right when lowered; must not be empty
    Sequential { declarations: Vec<DeclarationNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    Simple {
        name: String,
    },
    Array {
        length: IntegerValue,
        element: Box<TypeNode>,
    },
    Record {
        fields: Vec<FieldTypeNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormalParameterNode {
    Const {
        name: String,
        #[serde(rename = "type")]
        ty: TypeNode,
    },
    Var {
        name: String,
        #[serde(rename = "type")]
        ty: TypeNode,
    },
    Proc {
        name: String,
        #[serde(default)]
        parameters: Vec<FormalParameterNode>,
    },
    Func {
        name: String,
        #[serde(default)]
        parameters: Vec<FormalParameterNode>,
        result: TypeNode,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActualParameterNode {
    Const { value: ExpressionNode },
    Var { vname: VnameNode },
    Proc { name: String },
    Func { name: String },
}

fn check_name(name: &str) -> Result<&str, CompilationError> {
    if name.is_empty() {
        return Err(CompilationError::InterchangeError("empty identifier".to_string()));
    }
    Ok(name)
}

impl ProgramNode {
    pub fn from_json(text: &str) -> Result<Self, CompilationError> {
        serde_json::from_str(text).map_err(|e| CompilationError::InterchangeError(e.to_string()))
    }

    pub fn from_yaml(text: &str) -> Result<Self, CompilationError> {
        serde_yaml::from_str(text).map_err(|e| CompilationError::InterchangeError(e.to_string()))
    }

    /// Reads YAML for `.yaml`/`.yml` files and JSON for anything else
    pub fn from_file(path: &Path) -> Result<Self, CompilationError> {
        let text = std::fs::read_to_string(path)?;
        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            _ => Self::from_json(&text),
        };
        parsed.map_err(|e| match e {
            CompilationError::InterchangeError(msg) => {
                CompilationError::InterchangeError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a Program<'a>, CompilationError> {
        Ok(b.program(self.command.lower(b)?))
    }
}

impl CommandNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a Command<'a>, CompilationError> {
        Ok(match self {
            CommandNode::Assign { target, value } => b.assign(target.lower(b)?, value.lower(b)?),
            CommandNode::Call {
                procedure,
                arguments,
            } => b.call(check_name(procedure)?, &lower_arguments(arguments, b)?),
            CommandNode::Empty => b.skip(),
            CommandNode::If {
                condition,
                then_branch,
                else_branch,
            } => b.if_then_else(
                condition.lower(b)?,
                then_branch.lower(b)?,
                else_branch.lower(b)?,
            ),
            CommandNode::Let { declaration, body } => {
                b.let_in(declaration.lower(b)?, body.lower(b)?)
            }
            CommandNode::Sequential { commands } => {
                let lowered = commands
                    .iter()
                    .map(|command| command.lower(b))
                    .collect::<Result<Vec<_>, _>>()?;
                b.seq_all(&lowered)
            }
            CommandNode::While { condition, body } => {
                b.while_do(condition.lower(b)?, body.lower(b)?)
            }
        })
    }
}

impl ExpressionNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a Expression<'a>, CompilationError> {
        Ok(match self {
            ExpressionNode::Empty => b.empty_expr(),
            ExpressionNode::Integer { value } => b.int(&value.spelling()?),
            ExpressionNode::Character { value } => b.char_lit(&format!("'{}'", value)),
            ExpressionNode::Vname { vname } => b.read(vname.lower(b)?),
            ExpressionNode::Var { name } => b.var(check_name(name)?),
            ExpressionNode::Unary { operator, operand } => {
                b.unary(check_name(operator)?, operand.lower(b)?)
            }
            ExpressionNode::Binary {
                operator,
                left,
                right,
            } => b.binary(left.lower(b)?, check_name(operator)?, right.lower(b)?),
            ExpressionNode::If {
                condition,
                then_branch,
                else_branch,
            } => b.if_expr(
                condition.lower(b)?,
                then_branch.lower(b)?,
                else_branch.lower(b)?,
            ),
            ExpressionNode::Let { declaration, body } => {
                b.let_expr(declaration.lower(b)?, body.lower(b)?)
            }
            ExpressionNode::Call {
                function,
                arguments,
            } => b.call_expr(check_name(function)?, &lower_arguments(arguments, b)?),
            ExpressionNode::Array { elements } => {
                let lowered = elements
                    .iter()
                    .map(|element| element.lower(b))
                    .collect::<Result<Vec<_>, _>>()?;
                b.array(&lowered)
            }
            ExpressionNode::Record { fields } => {
                let mut lowered = Vec::with_capacity(fields.len());
                for field in fields {
                    lowered.push((check_name(&field.name)?, field.value.lower(b)?));
                }
                b.record(&lowered)
            }
        })
    }
}

impl VnameNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a Vname<'a>, CompilationError> {
        Ok(match self {
            VnameNode::Simple { name } => b.simple(check_name(name)?),
            VnameNode::Dot { base, field } => b.dot(base.lower(b)?, check_name(field)?),
            VnameNode::Subscript { base, index } => b.subscript(base.lower(b)?, index.lower(b)?),
        })
    }
}

impl DeclarationNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a Declaration<'a>, CompilationError> {
        Ok(match self {
            DeclarationNode::Const { name, value } => {
                b.const_decl(check_name(name)?, value.lower(b)?)
            }
            DeclarationNode::Var { name, ty } => b.var_decl(check_name(name)?, ty.lower(b)?),
            DeclarationNode::Proc {
                name,
                parameters,
                body,
            } => b.proc_decl(
                check_name(name)?,
                &lower_formals(parameters, b)?,
                body.lower(b)?,
            ),
            DeclarationNode::Func {
                name,
                parameters,
                result,
                body,
            } => b.func_decl(
                check_name(name)?,
                &lower_formals(parameters, b)?,
                result.lower(b)?,
                body.lower(b)?,
            ),
            DeclarationNode::Type { name, ty } => b.type_decl(check_name(name)?, ty.lower(b)?),
            DeclarationNode::UnaryOperator {
                operator,
                argument,
                result,
            } => b.unary_operator_decl(check_name(operator)?, argument.lower(b)?, result.lower(b)?),
            DeclarationNode::BinaryOperator {
                operator,
                left,
                right,
                result,
            } => b.binary_operator_decl(
                check_name(operator)?,
                left.lower(b)?,
                right.lower(b)?,
                result.lower(b)?,
            ),
            DeclarationNode::Sequential { declarations } => {
                let lowered = declarations
                    .iter()
                    .map(|decl| decl.lower(b))
                    .collect::<Result<Vec<_>, _>>()?;
                let Some((last, rest)) = lowered.split_last() else {
                    return Err(CompilationError::InterchangeError(
                        "sequential declaration with no declarations".to_string(),
                    ));
                };
                rest.iter()
                    .rev()
                    .fold(*last, |acc, &decl| b.seq_decl(decl, acc))
            }
        })
    }
}

impl TypeNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<&'a TypeDenoter<'a>, CompilationError> {
        Ok(match self {
            TypeNode::Simple { name } => b.simple_type(check_name(name)?),
            TypeNode::Array { length, element } => {
                b.array_type(&length.spelling()?, element.lower(b)?)
            }
            TypeNode::Record { fields } => {
                let mut lowered = Vec::with_capacity(fields.len());
                for field in fields {
                    lowered.push((check_name(&field.name)?, field.ty.lower(b)?));
                }
                b.record_type(&lowered)
            }
        })
    }
}

impl FormalParameterNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<FormalParameter<'a>, CompilationError> {
        Ok(match self {
            FormalParameterNode::Const { name, ty } => {
                b.const_param(check_name(name)?, ty.lower(b)?)
            }
            FormalParameterNode::Var { name, ty } => b.var_param(check_name(name)?, ty.lower(b)?),
            FormalParameterNode::Proc { name, parameters } => {
                b.proc_param(check_name(name)?, &lower_formals(parameters, b)?)
            }
            FormalParameterNode::Func {
                name,
                parameters,
                result,
            } => b.func_param(
                check_name(name)?,
                &lower_formals(parameters, b)?,
                result.lower(b)?,
            ),
        })
    }
}

impl ActualParameterNode {
    pub fn lower<'a>(&self, b: &AstBuilder<'a>) -> Result<ActualParameter<'a>, CompilationError> {
        Ok(match self {
            ActualParameterNode::Const { value } => ActualParameter::Const(value.lower(b)?),
            ActualParameterNode::Var { vname } => ActualParameter::Var(vname.lower(b)?),
            ActualParameterNode::Proc { name } => {
                ActualParameter::Proc(b.identifier(check_name(name)?))
            }
            ActualParameterNode::Func { name } => {
                ActualParameter::Func(b.identifier(check_name(name)?))
            }
        })
    }
}

fn lower_arguments<'a>(
    arguments: &[ActualParameterNode],
    b: &AstBuilder<'a>,
) -> Result<Vec<ActualParameter<'a>>, CompilationError> {
    arguments.iter().map(|argument| argument.lower(b)).collect()
}

fn lower_formals<'a>(
    parameters: &[FormalParameterNode],
    b: &AstBuilder<'a>,
) -> Result<Vec<FormalParameter<'a>>, CompilationError> {
    parameters.iter().map(|parameter| parameter.lower(b)).collect()
}
