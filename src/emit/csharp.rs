use super::MemberFormatter;
use crate::codegen::{
    Accessor, ActionMethod, Attribute, Member, OutletProperty, TypeDeclaration, Visibility,
};
use crate::error::EmitError;
use std::fmt::Write;

const HEADER: &str = "\
// ------------------------------------------------------------------------------
//  <autogenerated>
//      This code was generated by nibgen.
//
//      Changes to this file may cause incorrect behavior and will be lost if
//      the code is regenerated.
//  </autogenerated>
// ------------------------------------------------------------------------------
";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Renders declarations as C# partial classes.
#[derive(Debug, Clone)]
pub struct CSharpEmitter {
    indent: String,
}

impl Default for CSharpEmitter {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl CSharpEmitter {
    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent: indent.to_string(),
        }
    }

    /// Renders a complete source file: the generated-code header, then every
    /// declaration, wrapped in `namespace` when one is given.
    pub fn emit_compile_unit(
        &self,
        declarations: &[TypeDeclaration],
        namespace: Option<&str>,
    ) -> Result<String, EmitError> {
        let mut out = String::from(HEADER);
        let depth = match namespace {
            Some(ns) => {
                for part in ns.split('.') {
                    valid_identifier(part)?;
                }
                writeln!(out, "\nnamespace {} {{", ns)?;
                1
            }
            None => 0,
        };
        for declaration in declarations {
            out.push('\n');
            self.emit_declaration(declaration, &mut out, depth)?;
        }
        if namespace.is_some() {
            out.push_str("}\n");
        }
        Ok(out)
    }

    pub fn emit_declaration(
        &self,
        declaration: &TypeDeclaration,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        let pad = self.indent.repeat(depth);
        for comment in &declaration.comments {
            for line in comment.lines() {
                if line.is_empty() {
                    writeln!(out, "{}//", pad)?;
                } else {
                    writeln!(out, "{}// {}", pad, line)?;
                }
            }
        }
        for attribute in &declaration.attributes {
            self.emit_attribute(attribute, out, depth)?;
        }
        let partial = if declaration.is_partial { "partial " } else { "" };
        writeln!(
            out,
            "{}public {}class {} {{",
            pad,
            partial,
            valid_identifier(&declaration.name)?
        )?;
        for (i, member) in declaration.members.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.emit_member(member, out, depth + 1)?;
        }
        writeln!(out, "{}}}", pad)?;
        Ok(())
    }

    pub fn emit_member(
        &self,
        member: &Member,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        match member {
            Member::Outlet(outlet) => self.emit_outlet(outlet, out, depth),
            Member::Action(action) => self.emit_action(action, out, depth),
        }
    }

    fn emit_outlet(
        &self,
        outlet: &OutletProperty,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        let pad = self.indent.repeat(depth);
        let inner = self.indent.repeat(depth + 1);
        self.emit_attribute(&outlet.attribute, out, depth)?;
        writeln!(
            out,
            "{}{} {} {} {{",
            pad,
            visibility(outlet.visibility),
            outlet.type_ref,
            valid_identifier(&outlet.name)?
        )?;
        writeln!(out, "{}get {{", inner)?;
        self.emit_accessor(&outlet.getter, out, depth + 2)?;
        writeln!(out, "{}}}", inner)?;
        writeln!(out, "{}set {{", inner)?;
        self.emit_accessor(&outlet.setter, out, depth + 2)?;
        writeln!(out, "{}}}", inner)?;
        writeln!(out, "{}}}", pad)?;
        Ok(())
    }

    fn emit_accessor(
        &self,
        accessor: &Accessor,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        let pad = self.indent.repeat(depth);
        match accessor {
            Accessor::GetNativeField { field, cast } => writeln!(
                out,
                "{}return (({})(this.GetNativeField({})));",
                pad,
                cast,
                string_literal(field)
            )?,
            Accessor::SetNativeField { field } => writeln!(
                out,
                "{}this.SetNativeField({}, value);",
                pad,
                string_literal(field)
            )?,
        }
        Ok(())
    }

    fn emit_action(
        &self,
        action: &ActionMethod,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        let pad = self.indent.repeat(depth);
        self.emit_attribute(&action.attribute, out, depth)?;
        writeln!(
            out,
            "{}partial void {}({} {});",
            pad,
            method_identifier(&action.name),
            action.sender.type_ref,
            valid_identifier(&action.sender.name)?
        )?;
        Ok(())
    }

    fn emit_attribute(
        &self,
        attribute: &Attribute,
        out: &mut String,
        depth: usize,
    ) -> Result<(), EmitError> {
        writeln!(
            out,
            "{}[{}({})]",
            self.indent.repeat(depth),
            attribute.name,
            string_literal(&attribute.argument)
        )?;
        Ok(())
    }
}

impl MemberFormatter for CSharpEmitter {
    fn format_member(&self, member: &Member, out: &mut String) -> Result<(), EmitError> {
        self.emit_member(member, out, 0)
    }
}

fn visibility(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Private => "private",
    }
}

/// Checks that `name` is usable as a C# identifier, escaping keywords with `@`.
pub fn valid_identifier(name: &str) -> Result<String, EmitError> {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if !starts_ok || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(EmitError::InvalidIdentifier(name.to_string()));
    }
    if KEYWORDS.contains(&name) {
        Ok(format!("@{}", name))
    } else {
        Ok(name.to_string())
    }
}

/// Makes a selector-derived name usable as a C# method name. Characters that cannot
/// appear in an identifier, such as the `:` between selector parts, become `_`.
pub fn method_identifier(name: &str) -> String {
    let mut identifier: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if !identifier.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        identifier.insert(0, '_');
    }
    if KEYWORDS.contains(&identifier.as_str()) {
        format!("@{}", identifier)
    } else {
        identifier
    }
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
