use std::collections::HashMap;
use std::io::BufRead;

use vzor_core::{Preprocessor, Result, VzorError};

/// `<head> alias, alias` row of a paradigm section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadRow {
    pub head: String,
    pub aliases: Vec<String>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmDecl {
    pub id: String,
    pub line: usize,
    pub heads: Vec<HeadRow>,
}

/// Raw contents of a paradigm template file.
///
/// ```text
/// =alias
///     {suffix,tag}
/// +paradigm
///     <head> alias, alias
/// ```
/// Rows are tab-indented and `_` stands for the empty suffix.
#[derive(Debug, Clone, Default)]
pub struct ParadigmTemplate {
    origin: String,
    groups: HashMap<String, Vec<(String, String)>>,
    paradigms: Vec<ParadigmDecl>,
}

enum Section {
    None,
    Group(String),
    Paradigm(usize),
}

impl ParadigmTemplate {
    pub fn parse<R: BufRead>(
        reader: R,
        origin: &str,
        preprocessor: &dyn Preprocessor,
    ) -> Result<Self> {
        let mut template = Self {
            origin: origin.to_string(),
            ..Self::default()
        };
        let mut section = Section::None;

        for (index, line) in reader.lines().enumerate() {
            let line = preprocessor.process(&line?);
            let number = index + 1;

            if let Some(alias) = line.strip_prefix('=') {
                let alias = alias.trim().to_string();
                template.groups.insert(alias.clone(), Vec::new());
                section = Section::Group(alias);
            } else if let Some(body) = line.strip_prefix("\t{") {
                let Section::Group(alias) = &section else {
                    return Err(VzorError::malformed(origin, number, "ending row outside of an alias section"));
                };
                let body = body.trim_end().trim_end_matches('}');
                let mut values = body.split(',');
                let (Some(suffix), Some(tag)) = (values.next(), values.next()) else {
                    return Err(VzorError::malformed(origin, number, format!("expected {{suffix,tag}}, got {line:?}")));
                };
                let suffix = if suffix == "_" { "" } else { suffix };
                if let Some(group) = template.groups.get_mut(alias) {
                    group.push((suffix.to_string(), tag.trim().to_string()));
                }
            } else if let Some(id) = line.strip_prefix('+') {
                template.paradigms.push(ParadigmDecl {
                    id: id.trim().to_string(),
                    line: number,
                    heads: Vec::new(),
                });
                section = Section::Paradigm(template.paradigms.len() - 1);
            } else if line.starts_with("\t<") {
                let Section::Paradigm(current) = &section else {
                    return Err(VzorError::malformed(origin, number, "head row outside of a paradigm section"));
                };
                let mut values = line.split_whitespace();
                let head = values
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string();
                let aliases: Vec<String> = values
                    .map(|v| v.trim_end_matches(',').to_string())
                    .filter(|v| !v.is_empty())
                    .collect();

                let heads = &mut template.paradigms[*current].heads;
                // A repeated head replaces the earlier row in place
                match heads.iter_mut().find(|row| row.head == head) {
                    Some(row) => {
                        row.aliases = aliases;
                        row.line = number;
                    }
                    None => heads.push(HeadRow {
                        head,
                        aliases,
                        line: number,
                    }),
                }
            }
        }

        tracing::debug!(
            "Read {} ending groups and {} paradigms from {}",
            template.groups.len(),
            template.paradigms.len(),
            origin
        );
        Ok(template)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn paradigms(&self) -> &[ParadigmDecl] {
        &self.paradigms
    }

    pub fn group(&self, alias: &str) -> Option<&[(String, String)]> {
        self.groups.get(alias).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TEMPLATE;
    use vzor_core::DefaultPreprocessor;

    fn parse(text: &str) -> Result<ParadigmTemplate> {
        ParadigmTemplate::parse(text.as_bytes(), "test.par", &DefaultPreprocessor)
    }

    #[test]
    fn reads_groups_and_paradigms() {
        let template = parse(TEMPLATE).unwrap();
        assert_eq!(template.paradigms().len(), 2);

        let zena = &template.paradigms()[0];
        assert_eq!(zena.id, "žena");
        assert_eq!(zena.heads[0].head, "");
        assert_eq!(zena.heads[0].aliases, vec!["zena_sg", "zena_pl"]);

        let plural = template.group("zena_pl").unwrap();
        assert_eq!(plural[1], ("".to_string(), "k1gFnPc2".to_string()));
    }

    #[test]
    fn repeated_head_replaces_aliases() {
        let template = parse("=a\n\t{x,t}\n+p\n\t<ne> a\n\t<ne> a, a\n").unwrap();
        let heads = &template.paradigms()[0].heads;
        assert_eq!(heads.len(), 1);
        assert_eq!(heads[0].aliases, vec!["a", "a"]);
        assert_eq!(heads[0].line, 5);
    }

    #[test]
    fn rows_outside_sections_are_malformed() {
        let err = parse("\t{a,k1}\n").unwrap_err();
        assert!(matches!(err, VzorError::MalformedInput { line: 1, .. }));

        let err = parse("=a\n\t<> a\n").unwrap_err();
        assert!(matches!(err, VzorError::MalformedInput { line: 2, .. }));

        let err = parse("=a\n\t{only_suffix}\n").unwrap_err();
        assert!(matches!(err, VzorError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let template = parse("# comment\n\n=a\n\t{x,t}\n").unwrap();
        assert!(template.paradigms().is_empty());
        assert_eq!(template.group("a").unwrap().len(), 1);
    }
}
