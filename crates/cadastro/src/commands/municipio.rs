//! Município command handlers.

use cadastro_core::{EntityController, Municipio, MunicipioFilter, MunicipioForm};

use crate::cli::{MunicipioArgs, MunicipioCommand};
use crate::error::CliError;
use crate::view::TerminalView;

use super::{Context, util};

pub async fn handle(args: MunicipioArgs, ctx: &Context) -> Result<(), CliError> {
    let controller: EntityController<Municipio, _> =
        EntityController::new(ctx.client.clone(), TerminalView::default());

    match args.command {
        MunicipioCommand::List {
            codigo,
            uf,
            nome,
            status,
        } => {
            let filter = MunicipioFilter {
                codigo_municipio: codigo,
                codigo_uf: uf,
                nome,
                status,
            };
            util::list(&controller, &filter, ctx).await
        }

        MunicipioCommand::Save {
            codigo,
            uf,
            nome,
            status,
        } => {
            let mut form = MunicipioForm {
                codigo_municipio: codigo.unwrap_or_default(),
                codigo_uf: uf,
                nome,
                status,
            };
            util::save(&controller, &mut form, ctx).await
        }
    }
}
