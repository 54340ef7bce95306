//! 対話モード
//!
//! ## 操作
//! - 3つの質問（タイプ・用途・価格帯）に順に回答する
//! - 不正な回答は既定値に置き換えて先へ進む
//! - 推薦結果を表示したらセッション終了

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::render::render_recommendations;
use crate::transcript::Transcript;
use dialoguer::Input;
use pcb_advisor_common::prompts::FINISHED_MESSAGE;
use pcb_advisor_common::{format_recommendation, submit_answer, Catalog, Reply, Session};
use std::io::{BufRead, Write};

/// 1セッション分の対話を進める
pub struct ChatDriver<'a> {
    catalog: &'a Catalog,
    session: Session,
    format: OutputFormat,
    transcript: Transcript,
}

impl<'a> ChatDriver<'a> {
    pub fn new(catalog: &'a Catalog, format: OutputFormat) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(Session::opening_prompt());

        Self {
            catalog,
            session: Session::new(),
            format,
            transcript,
        }
    }

    pub fn opening_prompt(&self) -> &'static str {
        Session::opening_prompt()
    }

    /// 回答を処理して表示用の応答を返す
    pub fn handle(&mut self, input: &str) -> Result<String> {
        self.transcript.push_user(input);

        let session = std::mem::take(&mut self.session);
        let (next, reply) = submit_answer(session, self.catalog, input);
        self.session = next;

        let response = match reply {
            Reply::Prompt(question) => question.to_string(),
            Reply::Recommendations { criteria, matches } => {
                tracing::info!(?criteria, matches = matches.len(), "recommendations produced");
                let views: Vec<_> = matches.iter().map(format_recommendation).collect();
                render_recommendations(&views, self.format)?
            }
            Reply::Finished => FINISHED_MESSAGE.to_string(),
        };

        self.transcript.push_assistant(response.clone());
        Ok(response)
    }

    pub fn is_done(&self) -> bool {
        self.session.is_done()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

/// 端末で対話する
pub fn run_interactive(catalog: &Catalog, format: OutputFormat) -> Result<Transcript> {
    let mut driver = ChatDriver::new(catalog, format);
    let mut question = driver.opening_prompt().to_string();

    while !driver.is_done() {
        let answer: String = Input::new()
            .with_prompt(&question)
            .allow_empty(true)
            .interact_text()?;

        let response = driver.handle(&answer)?;
        if driver.is_done() {
            println!("\n{}", response);
        } else {
            question = response;
        }
    }

    Ok(driver.into_transcript())
}

/// 1行1回答で読み込む（パイプ・スクリプト用）
///
/// 入力が尽きた場合は残りの質問に空回答（既定値）を与えずに終了する。
pub fn run_scripted<R: BufRead, W: Write>(
    catalog: &Catalog,
    format: OutputFormat,
    reader: R,
    mut writer: W,
) -> Result<Transcript> {
    let mut driver = ChatDriver::new(catalog, format);
    writeln!(writer, "{}", driver.opening_prompt())?;

    for line in reader.lines() {
        // lines() は CRLF の行末も取り除く
        let line = line?;
        let response = driver.handle(&line)?;
        writeln!(writer, "{}", response)?;

        if driver.is_done() {
            break;
        }
    }

    if !driver.is_done() {
        tracing::warn!("input ended before the dialogue finished");
    }

    Ok(driver.into_transcript())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Role;
    use pcb_advisor_common::prompts::{APPLICATION_QUESTION, NO_MATCH_MESSAGE, PRICE_QUESTION};

    #[test]
    fn test_driver_walks_three_questions() {
        let catalog = Catalog::builtin();
        let mut driver = ChatDriver::new(&catalog, OutputFormat::Text);

        assert_eq!(driver.handle("advanced").unwrap(), APPLICATION_QUESTION);
        assert_eq!(driver.handle("amplifiers").unwrap(), PRICE_QUESTION);

        let result = driver.handle("moderate").unwrap();
        assert!(driver.is_done());
        assert!(result.contains("1. Double Sided PCBs (100%)"));
    }

    #[test]
    fn test_driver_after_done() {
        let catalog = Catalog::builtin();
        let mut driver = ChatDriver::new(&catalog, OutputFormat::Markdown);
        for answer in ["basic", "relays", "low"] {
            driver.handle(answer).unwrap();
        }

        assert_eq!(driver.handle("again").unwrap(), FINISHED_MESSAGE);
    }

    #[test]
    fn test_transcript_records_both_roles() {
        let catalog = Catalog::builtin();
        let mut driver = ChatDriver::new(&catalog, OutputFormat::Markdown);
        driver.handle("complex").unwrap();

        let roles: Vec<Role> = driver.transcript().messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn test_run_scripted_no_match() {
        // 一致なしは「Basic」既定値では起きにくいので専用カタログで確認
        let catalog = Catalog::from_json(
            r#"{"version": 1, "records": [{"name": "X", "category": "Rigid", "applications": ["Radar"], "priceTier": "High"}]}"#,
        )
        .unwrap();

        let input = b"nope\nsonar\nlow\n" as &[u8];
        let mut output = Vec::new();
        let transcript = run_scripted(&catalog, OutputFormat::Markdown, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.trim_end().ends_with(NO_MATCH_MESSAGE));
        assert_eq!(transcript.len(), 7);
    }

    #[test]
    fn test_run_scripted_crlf_input() {
        let catalog = Catalog::builtin();
        let input = b"advanced\r\namplifiers\r\nmoderate\r\n" as &[u8];
        let mut output = Vec::new();
        let transcript = run_scripted(&catalog, OutputFormat::Text, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("1. Double Sided PCBs (100%)"));
        assert_eq!(transcript.messages[1].content, "advanced");
    }

    #[test]
    fn test_run_scripted_stops_at_end_of_input() {
        let catalog = Catalog::builtin();
        let input = b"flexible\n" as &[u8];
        let mut output = Vec::new();
        let transcript = run_scripted(&catalog, OutputFormat::Text, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with(&format!("{}\n", APPLICATION_QUESTION)));
        assert_eq!(transcript.len(), 3);
    }
}
