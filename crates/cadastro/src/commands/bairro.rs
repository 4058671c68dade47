//! Bairro command handlers.

use cadastro_core::{Bairro, BairroFilter, BairroForm, EntityController};

use crate::cli::{BairroArgs, BairroCommand};
use crate::error::CliError;
use crate::view::TerminalView;

use super::{Context, util};

pub async fn handle(args: BairroArgs, ctx: &Context) -> Result<(), CliError> {
    let controller: EntityController<Bairro, _> =
        EntityController::new(ctx.client.clone(), TerminalView::default());

    match args.command {
        BairroCommand::List {
            codigo,
            municipio,
            nome,
            status,
        } => {
            let filter = BairroFilter {
                codigo_bairro: codigo,
                codigo_municipio: municipio,
                nome,
                status,
            };
            util::list(&controller, &filter, ctx).await
        }

        BairroCommand::Save {
            codigo,
            municipio,
            nome,
            status,
        } => {
            let mut form = BairroForm {
                codigo_bairro: codigo.unwrap_or_default(),
                codigo_municipio: municipio,
                nome,
                status,
            };
            util::save(&controller, &mut form, ctx).await
        }
    }
}
