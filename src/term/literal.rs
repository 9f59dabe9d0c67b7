//! Literal terms
//!
//! Literals only show up as values reached by a path, never as entry points or
//! path nodes, so the model keeps the lexical form and its tag and nothing
//! more. Datatype IRIs follow RDF 1.1: a simple literal is an `xsd:string`.

use std::fmt;

use crate::core::namespaces::ns;
use super::Iri;

/// Tag carried by a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// Simple literal, implicitly `xsd:string`
    Plain,
    /// Language-tagged literal, implicitly `rdf:langString`; tag is lowercased
    Language(Box<str>),
    /// Any other datatype
    Typed(Iri),
}

/// An RDF literal
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: Box<str>,
    datatype: Datatype,
}

impl Literal {
    pub fn plain(value: String) -> Self {
        Literal {
            lexical: value.into_boxed_str(),
            datatype: Datatype::Plain,
        }
    }

    /// Typed literal; `xsd:string` collapses to a simple literal so both
    /// spellings compare equal
    pub fn typed(value: String, datatype: String) -> Self {
        if ns::local_name(&datatype, ns::XSD) == Some("string") {
            return Self::plain(value);
        }
        Literal {
            lexical: value.into_boxed_str(),
            datatype: Datatype::Typed(Iri::new(datatype)),
        }
    }

    pub fn with_language(value: String, lang: String) -> Self {
        Literal {
            lexical: value.into_boxed_str(),
            datatype: Datatype::Language(lang.to_ascii_lowercase().into_boxed_str()),
        }
    }

    /// The lexical form
    pub fn value(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        match &self.datatype {
            Datatype::Language(lang) => Some(lang),
            _ => None,
        }
    }

    /// The datatype IRI, explicit or implied
    pub fn datatype_iri(&self) -> String {
        match &self.datatype {
            Datatype::Plain => ns::iri(ns::XSD, "string"),
            Datatype::Language(_) => ns::iri(ns::RDF, "langString"),
            Datatype::Typed(iri) => iri.as_str().to_string(),
        }
    }

    /// N-Triples style quoting of the lexical form
    fn write_quoted(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_quoted(f)?;
        match &self.datatype {
            Datatype::Plain => Ok(()),
            Datatype::Language(lang) => write!(f, "@{}", lang),
            Datatype::Typed(iri) => write!(f, "^^{}", iri),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    #[test]
    fn test_simple_literal() {
        let lit = Literal::plain("7".into());
        assert_eq!(lit.value(), "7");
        assert_eq!(lit.datatype(), &Datatype::Plain);
        assert_eq!(lit.datatype_iri(), "http://www.w3.org/2001/XMLSchema#string");
        assert_eq!(lit.to_string(), "\"7\"");
    }

    #[test]
    fn test_xsd_string_is_simple() {
        let typed = Literal::typed("7".into(), "http://www.w3.org/2001/XMLSchema#string".into());
        assert_eq!(typed, Literal::plain("7".into()));
    }

    #[test]
    fn test_typed_literal() {
        let lit = Literal::typed("42".into(), XSD_INTEGER.into());
        assert_eq!(lit.datatype_iri(), XSD_INTEGER);
        assert_ne!(lit, Literal::plain("42".into()));
        assert_eq!(lit.to_string(), format!("\"42\"^^<{}>", XSD_INTEGER));
    }

    #[test]
    fn test_lang_literal() {
        let lit = Literal::with_language("hello".into(), "EN-gb".into());
        assert_eq!(lit.language(), Some("en-gb"));
        assert_eq!(lit.datatype_iri(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
        assert_eq!(lit.to_string(), "\"hello\"@en-gb");
    }

    #[test]
    fn test_display_escapes_quotes() {
        let lit = Literal::plain("say \"hi\"\n".into());
        assert_eq!(lit.to_string(), r#""say \"hi\"\n""#);
    }
}
