//! Construção de paths versionados (v2 / v3)
//!
//! Apenas a v3 é escopada por workspace. A checagem do workspace acontece
//! aqui, antes de qualquer I/O.

use crate::error::{ClickUpError, Result};

/// Substitui cada `{}` do template pelo argumento escapado correspondente
///
/// Placeholders sem argumento ficam vazios; argumentos excedentes são ignorados.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if let Some(arg) = args.next() {
            out.push_str(&urlencoding::encode(arg));
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// Junta segmentos garantindo uma única `/` entre eles
fn join(prefix: &str, tail: &str) -> String {
    let mut path = String::with_capacity(prefix.len() + tail.len() + 1);
    path.push_str(prefix);
    path.push('/');
    path.push_str(tail);
    collapse_slashes(&path)
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Path v2: `/v2/<template preenchido>`
///
/// ```
/// assert_eq!(clickup::paths::v2("/list/{}/task", &["list-1"]), "/v2/list/list-1/task");
/// ```
pub fn v2(template: &str, args: &[&str]) -> String {
    join("/v2", &fill(template, args))
}

/// Path v3: `/v3/workspaces/<workspace_id>/<template preenchido>`
pub fn v3(workspace_id: Option<&str>, template: &str, args: &[&str]) -> Result<String> {
    let workspace_id = workspace_id
        .map(str::trim)
        .filter(|ws| !ws.is_empty())
        .ok_or(ClickUpError::WorkspaceIdRequired)?;

    let prefix = format!("/v3/workspaces/{}", urlencoding::encode(workspace_id));
    Ok(join(&prefix, &fill(template, args)))
}
