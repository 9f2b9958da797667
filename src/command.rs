// src/command.rs

//! 対話モードの一行コマンド。

use crate::{
    error::{AppError, AppResult},
    form::FormField,
    models::TimeSlot,
    utils,
};
use clap::ValueEnum;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Set(FormField, String),
    Clear(FormField),
    Toggle(TimeSlot),
    Show,
    Search,
    Reset,
    Popular,
    Options,
    Help,
}

fn parse_field(name: &str) -> AppResult<FormField> {
    FormField::from_str(&name.replace('-', "_"), true).map_err(|_| {
        let names: Vec<String> = FormField::value_variants()
            .iter()
            .filter_map(|f| f.to_possible_value().map(|v| v.get_name().to_string()))
            .collect();
        AppError::UserInputError(format!(
            "不明な項目 '{}'。項目: {}",
            name,
            names.join(", ")
        ))
    })
}

impl FormCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_lowercase().as_str() {
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    AppError::UserInputError("使い方: set <項目> <値>".into())
                })?;
                Ok(FormCommand::Set(parse_field(field)?, value.trim().to_string()))
            }
            "clear" if !rest.is_empty() => Ok(FormCommand::Clear(parse_field(rest)?)),
            "clear" => Err(AppError::UserInputError("使い方: clear <項目>".into())),
            "slot" | "toggle" => Ok(FormCommand::Toggle(utils::parse_slot(rest)?)),
            "show" => Ok(FormCommand::Show),
            "search" | "s" => Ok(FormCommand::Search),
            "reset" => Ok(FormCommand::Reset),
            "popular" => Ok(FormCommand::Popular),
            "options" => Ok(FormCommand::Options),
            "help" | "?" => Ok(FormCommand::Help),
            _ => Err(AppError::UserInputError(format!(
                "不明なコマンド '{}'。help で一覧を表示します。",
                verb
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_and_clear() {
        assert_eq!(
            FormCommand::parse("set department 経済学部").unwrap(),
            FormCommand::Set(FormField::Department, "経済学部".into())
        );
        assert_eq!(
            FormCommand::parse("set course-name 線形代数 演習").unwrap(),
            FormCommand::Set(FormField::CourseName, "線形代数 演習".into())
        );
        assert_eq!(
            FormCommand::parse("clear academic_field").unwrap(),
            FormCommand::Clear(FormField::AcademicField)
        );
        assert!(FormCommand::parse("set major").is_err());
        assert!(FormCommand::parse("clear").is_err());
        assert!(FormCommand::parse("set campus 日吉").is_err());
    }

    #[test]
    fn test_parse_slot_and_verbs() {
        assert_eq!(
            FormCommand::parse("slot 水3").unwrap(),
            FormCommand::Toggle(TimeSlot::new("水", "3"))
        );
        assert!(FormCommand::parse("slot 日1").is_err());
        assert_eq!(FormCommand::parse("SEARCH").unwrap(), FormCommand::Search);
        assert_eq!(FormCommand::parse(" reset ").unwrap(), FormCommand::Reset);
        assert!(matches!(
            FormCommand::parse("launch"),
            Err(AppError::UserInputError(_))
        ));
    }
}
