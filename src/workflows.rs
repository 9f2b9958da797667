// src/workflows.rs

use crate::{
    SearchJobContext,
    catalog,
    cli::Cli,
    command::FormCommand,
    config::ResetBehavior,
    constants,
    error::{AppError, AppResult},
    form::{FormField, SearchForm},
    models::CourseListing,
    render,
    session::SearchSession,
    ui, utils,
};
use clap::ValueEnum;
use colored::*;
use log::{debug, error};
use std::io::{self, BufRead};

/// コマンドライン引数の検索条件をフォームに反映する。学科は学部の後に設定する
pub fn apply_cli_filters(form: &mut SearchForm, args: &Cli) -> AppResult<()> {
    let fields = [
        (FormField::Year, &args.year),
        (FormField::Department, &args.department),
        (FormField::Major, &args.major),
        (FormField::Semester, &args.semester),
        (FormField::CourseName, &args.course_name),
        (FormField::Instructor, &args.instructor),
        (FormField::ClassType, &args.class_type),
        (FormField::Language, &args.language),
        (FormField::Level, &args.level),
        (FormField::AcademicField, &args.academic_field),
        (FormField::Query, &args.query),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            form.set_field(field, value.trim())?;
        }
    }
    for raw in &args.slots {
        let slot = utils::parse_slot(raw)?;
        if !form.is_selected(&slot.day, &slot.period) {
            form.toggle(slot);
        }
    }
    Ok(())
}

/// 引数の条件で一回だけ検索する
pub(crate) async fn run_search(context: SearchJobContext) -> AppResult<()> {
    let mut session = SearchSession::new(context.backend.clone(), context.config.reset_behavior);
    apply_cli_filters(session.controller_mut().form_mut(), &context.args)?;
    if !session.controller().form().has_filters() {
        return Err(AppError::UserInputError(
            "検索条件を一つ以上指定してください (年度のみは不可)。--interactive で対話モード、--popular で人気の授業を表示します。"
                .into(),
        ));
    }

    let pbar = (!context.args.json).then(ui::new_spinner);
    let result = session
        .submit_with(|label| {
            if let Some(pbar) = &pbar {
                pbar.set_message(label.to_string());
            }
        })
        .await;
    if let Some(pbar) = pbar {
        pbar.finish_and_clear();
    }
    result?;

    print_listing(session.listing(), context.args.json)
}

/// 人気の授業を表示する
pub(crate) async fn run_popular(context: SearchJobContext) -> AppResult<()> {
    let mut session = SearchSession::new(context.backend.clone(), context.config.reset_behavior);
    session.load_popular().await?;
    print_listing(session.listing(), context.args.json)
}

fn print_listing(listing: &CourseListing, as_json: bool) -> AppResult<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&listing.courses)?);
    } else {
        ui::plain(&render::render_listing(listing));
    }
    Ok(())
}

pub fn print_options() {
    for field in FormField::value_variants() {
        if let Some(options) = field.options() {
            ui::print_sub_header(field.label());
            ui::plain(&format!("  {}", options.join(", ")));
        }
    }
    ui::print_sub_header(FormField::Major.label());
    for dept in catalog::DEPARTMENTS {
        ui::plain(&format!("  {}: {}", dept, catalog::majors_for(dept).join(", ")));
    }
    ui::print_sub_header("曜日・時限");
    ui::plain(&format!(
        "  曜日: {}  時限: {}",
        catalog::DAYS.join(", "),
        catalog::PERIODS.join(", ")
    ));
}

/// 対話モード。一行ずつコマンドを読み、空行または入力の終わりで終了する
pub(crate) async fn run_interactive(context: SearchJobContext) -> AppResult<()> {
    let mut session = SearchSession::new(context.backend.clone(), context.config.reset_behavior);
    apply_cli_filters(session.controller_mut().form_mut(), &context.args)?;

    ui::print_header("授業を検索");
    ui::plain("いずれか一つの項目からでも検索が可能です。help でコマンド一覧を表示します。");

    if context.config.reset_behavior == ResetBehavior::ReloadPopular {
        if let Err(e) = session.load_popular().await {
            report_error(&e);
        } else {
            ui::plain(&render::render_listing(session.listing()));
        }
    }

    drive_interactive(&mut session, io::BufReader::new(io::stdin())).await?;

    ui::plain("");
    ui::info("対話モードを終了します。");
    Ok(())
}

/// `input` から読んだコマンドを順に実行する。個々のコマンドの失敗は表示して続行する
async fn drive_interactive<R: BufRead>(session: &mut SearchSession, mut input: R) -> AppResult<()> {
    loop {
        let line = ui::prompt(&mut input, "コマンド")?;
        if line.is_empty() {
            return Ok(());
        }

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                report_error(&e);
                continue;
            }
        };
        debug!("対話コマンド: {:?}", command);

        if let Err(e) = execute(session, command).await {
            error!("対話コマンド '{}' が失敗しました: {}", line, e);
            report_error(&e);
            if e.is_search_failure() && !session.listing().courses.is_empty() {
                ui::info("前回の一覧をそのまま表示しています。");
            }
        }
    }
}

async fn execute(session: &mut SearchSession, command: FormCommand) -> AppResult<()> {
    match command {
        FormCommand::Set(field, value) => {
            let form = session.controller_mut().form_mut();
            form.set_field(field, value)?;
            if field == FormField::Department {
                ui::info(&if form.available_majors().is_empty() {
                    "学科の選択肢はありません。学科をリセットしました。".to_string()
                } else {
                    format!(
                        "学科をリセットしました。選択肢: {}",
                        form.available_majors().join(", ")
                    )
                });
            }
        }
        FormCommand::Clear(field) => session.controller_mut().form_mut().set_field(field, "")?,
        FormCommand::Toggle(slot) => {
            let label = slot.to_string();
            if session.controller_mut().form_mut().toggle(slot) {
                ui::info(&format!("{} を選択しました。", label));
            } else {
                ui::info(&format!("{} の選択を外しました。", label));
            }
        }
        FormCommand::Show => {
            let controller = session.controller();
            ui::plain(&render::render_form(controller.form(), controller.submit_label()));
        }
        FormCommand::Search => {
            let pbar = ui::new_spinner();
            let result = session
                .submit_with(|label| pbar.set_message(label.to_string()))
                .await;
            pbar.finish_and_clear();
            result?;
            ui::plain(&render::render_listing(session.listing()));
        }
        FormCommand::Reset => {
            session.reset().await?;
            ui::success("検索条件をリセットしました。");
            if !session.listing().courses.is_empty() {
                ui::plain(&render::render_listing(session.listing()));
            }
        }
        FormCommand::Popular => {
            session.load_popular().await?;
            ui::plain(&render::render_listing(session.listing()));
        }
        FormCommand::Options => print_options(),
        FormCommand::Help => ui::box_message(
            "対話モードのコマンド",
            constants::HELP_INTERACTIVE.lines().collect::<Vec<_>>().as_slice(),
            |s| s.cyan(),
        ),
    }
    Ok(())
}

/// 利用者向けのエラー表示。検索の失敗と入力ミスを区別する
pub fn describe_error(e: &AppError) -> String {
    match e {
        AppError::Status { status, .. } => format!("検索に失敗しました: サーバーがエラーを返しました ({})", status),
        AppError::Network(req_err) if req_err.is_timeout() => "検索に失敗しました: 接続がタイムアウトしました。".to_string(),
        AppError::Network(_) | AppError::NetworkMiddleware(_) => {
            "検索に失敗しました: サーバーに接続できません。".to_string()
        }
        AppError::ApiParseFailed { .. } => "検索に失敗しました: サーバーの応答を解析できません。".to_string(),
        AppError::UserInputError(msg) => msg.clone(),
        _ => format!("エラーが発生しました: {}", e),
    }
}

pub(crate) fn report_error(e: &AppError) {
    match e {
        AppError::UserInputError(_) => ui::warn(&describe_error(e)),
        _ => ui::error(&describe_error(e)),
    }
}
