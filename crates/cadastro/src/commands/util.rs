//! Shared helpers for command handlers.

use cadastro_core::{EnderecoForm, Entity, EntityController, SubmitOutcome};

use crate::error::CliError;
use crate::output;
use crate::view::TerminalView;

use super::Context;

/// Fetch the collection (or the filtered subset) and print it.
pub async fn list<E>(
    controller: &EntityController<E, TerminalView>,
    filter: &E::Filter,
    ctx: &Context,
) -> Result<(), CliError>
where
    E: Entity + serde::Serialize,
    E::Filter: PartialEq,
{
    let records = if *filter == E::Filter::default() {
        controller.list().await?
    } else {
        controller.list_filtered(filter).await?
    };
    print_list(controller, &records, ctx).await;
    Ok(())
}

/// Print records with the headers and rows the view was last given.
pub async fn print_list<E>(
    controller: &EntityController<E, TerminalView>,
    records: &[E],
    ctx: &Context,
) where
    E: Entity + serde::Serialize,
{
    let out = controller
        .with_view(|view| output::render_list(ctx.output, view.headers(), view.rows(), records))
        .await;
    output::print_output(&out, ctx.quiet);
}

/// Submit a filled-in form and report the outcome.
pub async fn save<E: Entity>(
    controller: &EntityController<E, TerminalView>,
    form: &mut E::Form,
    ctx: &Context,
) -> Result<(), CliError> {
    let outcome = controller.submit(form).await;
    report(controller, outcome, ctx).await
}

/// Print the notices of a save, or turn a failed one into an error.
pub async fn report<E: Entity>(
    controller: &EntityController<E, TerminalView>,
    outcome: SubmitOutcome,
    ctx: &Context,
) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Saved => {
            let notices = controller.with_view(TerminalView::take_notices).await;
            for notice in &notices {
                output::print_notice(notice, ctx.color, ctx.quiet);
            }
            Ok(())
        }
        SubmitOutcome::Rejected { message } => {
            let shown = controller
                .with_view(|view| view.error().map(str::to_owned))
                .await;
            Err(CliError::Rejected {
                message: shown.unwrap_or(message),
            })
        }
        SubmitOutcome::Failed(err) => Err(err.into()),
    }
}

/// Parse one `--endereco` value (`bairro=3,rua=Rua A,numero=10,cep=...`).
///
/// Keys may also be given by their wire names (`codigoBairro`, `nomeRua`).
/// Unlisted keys are left blank. A comma only starts a new pair when the
/// text after it reads `KEY=`; otherwise it belongs to the current value,
/// so `complemento=Bloco B, Apto 3` stays whole.
pub fn parse_endereco(raw: &str) -> Result<EnderecoForm, CliError> {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    for part in raw.split(',').filter(|part| !part.trim().is_empty()) {
        match part.split_once('=') {
            Some((key, value)) if is_key(key) => pairs.push((key.trim(), value.to_owned())),
            _ => match pairs.last_mut() {
                Some((_, value)) => {
                    value.push(',');
                    value.push_str(part);
                }
                None => {
                    return Err(CliError::Validation {
                        field: "endereco".into(),
                        reason: format!("expected KEY=VALUE, got '{part}'"),
                    });
                }
            },
        }
    }

    let mut slot = EnderecoForm::default();
    for (key, value) in pairs {
        let field = match key {
            "bairro" | "codigoBairro" => &mut slot.codigo_bairro,
            "rua" | "nomeRua" => &mut slot.nome_rua,
            "numero" => &mut slot.numero,
            "complemento" => &mut slot.complemento,
            "cep" => &mut slot.cep,
            other => {
                return Err(CliError::Validation {
                    field: "endereco".into(),
                    reason: format!(
                        "unknown key '{other}'. Valid keys: bairro, rua, numero, complemento, cep"
                    ),
                });
            }
        };
        *field = value;
    }

    Ok(slot)
}

fn is_key(candidate: &str) -> bool {
    let key = candidate.trim();
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric())
}
