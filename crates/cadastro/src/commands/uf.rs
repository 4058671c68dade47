//! UF command handlers.

use cadastro_core::{EntityController, Uf, UfFilter, UfForm};

use crate::cli::{UfArgs, UfCommand};
use crate::error::CliError;
use crate::view::TerminalView;

use super::{Context, util};

pub async fn handle(args: UfArgs, ctx: &Context) -> Result<(), CliError> {
    let controller: EntityController<Uf, _> =
        EntityController::new(ctx.client.clone(), TerminalView::default());

    match args.command {
        UfCommand::List {
            codigo,
            sigla,
            nome,
            status,
        } => {
            let filter = UfFilter {
                codigo_uf: codigo,
                sigla,
                nome,
                status,
            };
            util::list(&controller, &filter, ctx).await
        }

        UfCommand::Save {
            codigo,
            sigla,
            nome,
            status,
        } => {
            let mut form = UfForm {
                codigo_uf: codigo.unwrap_or_default(),
                sigla,
                nome,
                status,
            };
            util::save(&controller, &mut form, ctx).await
        }
    }
}
