//! # 动作处理集成测试
//!
//! 模拟动作处理方按各自的参数约定读取整份脚本中的动作行。

use text_decoder::{ActionLine, ActionLineError, ScriptLine, recognize_lines};

/// 测试用的动作：处理方读取完参数后得到的结果
#[derive(Debug, PartialEq)]
enum Action {
    Wait { seconds: f32 },
    Bgm { track: String, fade: Option<String> },
    ShowEvidence { index: i32 },
    Actor { name: String },
}

/// 处理方错误：动作名未注册，或参数读取失败
#[derive(Debug, PartialEq)]
enum HandlerError {
    UnknownAction(String),
    Line(ActionLineError),
}

impl From<ActionLineError> for HandlerError {
    fn from(e: ActionLineError) -> Self {
        Self::Line(e)
    }
}

type HandlerResult = Result<Action, HandlerError>;

/// 按动作名读取参数
fn handle(mut line: ActionLine) -> HandlerResult {
    let action = line.action().to_string();
    match action.as_str() {
        "wait" => Ok(Action::Wait {
            seconds: line.next_float("seconds")?,
        }),
        "bgm" => Ok(Action::Bgm {
            track: line.next_string("track")?,
            fade: line.next_optional_string("fade")?,
        }),
        "evidence" => Ok(Action::ShowEvidence {
            index: line.next_one_based_int("evidence index")?,
        }),
        "actor" => Ok(Action::Actor {
            name: line.next_asset_name("actor")?.to_string(),
        }),
        other => Err(HandlerError::UnknownAction(other.to_string())),
    }
}

fn run(script: &str) -> Vec<(usize, HandlerResult)> {
    recognize_lines(script)
        .iter()
        .filter_map(|l| {
            let parsed = l.parse_action()?;
            let handled = parsed.map_err(HandlerError::from).and_then(handle);
            Some((l.line_number(), handled))
        })
        .collect()
}

#[test]
fn test_script_with_mixed_lines() {
    let script = "\
<bgm:courtroom_lounge>
Phoenix: I have to win this one.
<wait:0.5>
<actor:phoenix wright>
<bgm:cross_examination,fast>
<evidence:2>
";

    let results = run(script);
    let actions: Vec<_> = results
        .into_iter()
        .map(|(line, r)| (line, r.unwrap()))
        .collect();

    assert_eq!(
        actions,
        vec![
            (
                1,
                Action::Bgm {
                    track: "courtroom_lounge".to_string(),
                    fade: None
                }
            ),
            (3, Action::Wait { seconds: 0.5 }),
            (
                4,
                Action::Actor {
                    name: "PhoenixWright".to_string()
                }
            ),
            (
                5,
                Action::Bgm {
                    track: "cross_examination".to_string(),
                    fade: Some("fast".to_string())
                }
            ),
            (6, Action::ShowEvidence { index: 2 }),
        ]
    );
}

#[test]
fn test_handler_errors_are_reported_per_line() {
    let script = "<wait>\n<evidence:0>\n<wait:1,5>\n<bgm:a:b>\n";
    let results = run(script);

    assert_eq!(results.len(), 4);

    // `<wait>` 只有一个空参数
    assert_eq!(
        results[0].1,
        Err(HandlerError::Line(ActionLineError::UnableToParse {
            type_name: "decimal value".to_string(),
            name: "seconds".to_string(),
            token: String::new(),
        }))
    );
    assert_eq!(
        results[1].1,
        Err(HandlerError::Line(ActionLineError::UnableToParse {
            type_name: "one-based integer".to_string(),
            name: "evidence index".to_string(),
            token: "0".to_string(),
        }))
    );
    // 逗号是参数分隔符，`1,5` 读出的是 1.0 且多出一个未读参数
    assert_eq!(results[2].1, Ok(Action::Wait { seconds: 1.0 }));
    assert_eq!(
        results[3].1,
        Err(HandlerError::Line(ActionLineError::InvalidSyntax {
            line: "<bgm:a:b>".to_string(),
        }))
    );
}

#[test]
fn test_unknown_action_is_handler_error() {
    let results = run("<shake:3>\n");

    assert_eq!(
        results,
        vec![(1, Err(HandlerError::UnknownAction("shake".to_string())))]
    );
}

#[test]
fn test_optional_fallback_after_failed_required_read() {
    let mut line = ActionLine::new("<bgm:theme>").unwrap();
    line.next_string("track").unwrap();

    let err = line.next_string("fade").unwrap_err();
    assert!(err.is_not_enough_parameters());
    assert_eq!(line.next_optional_string("fade"), Ok(None));
    assert!(line.is_exhausted());
}

#[test]
fn test_dialogue_lines_are_not_actions() {
    let lines = recognize_lines("Maya: <giggles>?\n<wait>");
    assert!(matches!(lines[0], ScriptLine::Dialogue { .. }));
    assert!(lines[1].is_action());
}
