//! Pessoa command handlers, including the address list.

use cadastro_core::{PersonController, PessoaFilter, PessoaForm};

use crate::cli::{PessoaArgs, PessoaCommand, PessoaSaveArgs};
use crate::error::CliError;
use crate::output;
use crate::view::TerminalView;

use super::{Context, util};

pub async fn handle(args: PessoaArgs, ctx: &Context) -> Result<(), CliError> {
    let controller = PersonController::new(ctx.client.clone(), TerminalView::default());

    match args.command {
        PessoaCommand::List {
            codigo,
            login,
            status,
        } => {
            let filter = PessoaFilter {
                codigo_pessoa: codigo,
                login,
                status,
            };
            let records = if filter == PessoaFilter::default() {
                controller.list().await?
            } else {
                controller.list_filtered(&filter).await?
            };
            util::print_list(controller.entity(), &records, ctx).await;
            Ok(())
        }

        PessoaCommand::Save(save) => {
            let mut form = build_form(&controller, save)?;
            let outcome = controller.submit(&mut form).await;
            util::report(controller.entity(), outcome, ctx).await
        }

        PessoaCommand::Enderecos { codigo_pessoa } => {
            controller.view_addresses(codigo_pessoa).await?;
            let out = controller
                .with_view(|view| {
                    output::render_lines(
                        ctx.output,
                        "Endereços",
                        view.addresses().unwrap_or_default(),
                    )
                })
                .await;
            controller.close_addresses().await;
            output::print_output(&out, ctx.quiet);
            Ok(())
        }
    }
}

/// Fill a person form from flags, one address slot per `--endereco`.
fn build_form(
    controller: &PersonController<TerminalView>,
    args: PessoaSaveArgs,
) -> Result<PessoaForm, CliError> {
    let senha = match args.senha {
        Some(senha) => senha,
        None => rpassword::prompt_password("Senha: ")?,
    };

    let mut form = PessoaForm {
        codigo_pessoa: args.codigo.unwrap_or_default(),
        nome: args.nome,
        sobrenome: args.sobrenome,
        idade: args.idade,
        login: args.login,
        senha,
        status: args.status,
        enderecos: Vec::new(),
    };

    for raw in &args.enderecos {
        let parsed = util::parse_endereco(raw)?;
        *controller.add_address_slot(&mut form) = parsed;
    }

    Ok(form)
}
