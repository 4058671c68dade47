#![allow(clippy::unwrap_used)]
// Controller behaviour against a wiremock API and a recording view.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cadastro_core::{
    AddressOverlay, ApiClient, ControllerState, CoreError, EntityController, FormView, Municipio,
    MunicipioForm, PersonController, PessoaForm, RowViewModel, SubmitOutcome, TableView, Uf,
    UfFilter, UfForm,
};

// ── Recording view ──────────────────────────────────────────────────

#[derive(Debug, Default)]
struct RecordingView {
    headers: Vec<String>,
    rows: Vec<RowViewModel>,
    renders: usize,
    error: String,
    notices: Vec<String>,
    overlay: Option<Vec<String>>,
}

impl TableView for RecordingView {
    fn render_rows(&mut self, headers: &[&str], rows: Vec<RowViewModel>) {
        self.headers = headers.iter().map(ToString::to_string).collect();
        self.rows = rows;
        self.renders += 1;
    }
}

impl FormView for RecordingView {
    fn show_error(&mut self, message: &str) {
        self.error = message.to_owned();
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}

impl AddressOverlay for RecordingView {
    fn show_addresses(&mut self, lines: Vec<String>) {
        self.overlay = Some(lines);
    }

    fn close_addresses(&mut self) {
        self.overlay = None;
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
    );
    (server, client)
}

fn sp_form(codigo: &str, status: &str) -> UfForm {
    UfForm {
        codigo_uf: codigo.into(),
        sigla: "SP".into(),
        nome: "São Paulo".into(),
        status: status.into(),
    }
}

async fn mount_uf_list(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "codigoUF": 1, "sigla": "SP", "nome": "São Paulo", "status": 1 }
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ── Lister ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_renders_rows_in_server_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/municipio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "codigoMunicipio": 20, "codigoUF": 1, "nome": "Santos", "status": 1 },
            { "codigoMunicipio": 10, "codigoUF": 1, "nome": "Campinas", "status": 2 }
        ])))
        .mount(&server)
        .await;

    let controller: EntityController<Municipio, _> =
        EntityController::new(client, RecordingView::default());
    let records = controller.list().await.unwrap();

    assert_eq!(records.len(), 2);
    controller
        .with_view(|view| {
            assert_eq!(view.headers, ["Código", "UF", "Nome", "Status"]);
            assert_eq!(view.rows[0].cells, ["20", "1", "Santos", "Ativo"]);
            assert_eq!(view.rows[1].cells, ["10", "1", "Campinas", "Inativo"]);
        })
        .await;
}

#[tokio::test]
async fn test_list_failure_keeps_previous_table() {
    let (server, client) = setup().await;
    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());

    mount_uf_list(&server, 1).await;
    controller.list().await.unwrap();

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(controller.list().await.is_err());
    controller
        .with_view(|view| {
            assert_eq!(view.renders, 1);
            assert_eq!(view.rows.len(), 1);
        })
        .await;
}

#[tokio::test]
async fn test_unreachable_api_is_a_connection_failure() {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).unwrap();
    drop(server);

    let client = ApiClient::with_client(reqwest::Client::new(), base);
    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());

    let err = controller.list().await.unwrap_err();
    assert!(matches!(err, CoreError::ConnectionFailed { .. }), "{err:?}");
}

#[tokio::test]
async fn test_list_filtered_passes_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/uf"))
        .and(query_param("status", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let filter = UfFilter {
        status: Some(2),
        ..UfFilter::default()
    };
    let records = controller.list_filtered(&filter).await.unwrap();

    assert!(records.is_empty());
    controller.with_view(|view| assert_eq!(view.renders, 1)).await;
}

// ── Upserter ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_submit_without_code_creates_and_refreshes_once() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/uf"))
        .and(body_json(json!({ "sigla": "SP", "nome": "São Paulo", "status": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    mount_uf_list(&server, 1).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let mut form = sp_form("", "1");

    let outcome = controller.submit(&mut form).await;

    assert!(outcome.is_saved(), "unexpected outcome: {outcome:?}");
    assert_eq!(form, UfForm::default());
    assert_eq!(controller.state(), ControllerState::Idle);
    controller
        .with_view(|view| {
            assert_eq!(view.renders, 1);
            assert_eq!(view.notices, ["UF salva com sucesso!"]);
            assert!(view.error.is_empty());
        })
        .await;
}

#[tokio::test]
async fn test_submit_with_code_updates_with_all_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/uf"))
        .and(body_json(json!({
            "codigoUF": 5, "sigla": "SP", "nome": "São Paulo", "status": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    mount_uf_list(&server, 1).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let mut form = sp_form("5", "0");

    assert!(controller.submit(&mut form).await.is_saved());
}

#[tokio::test]
async fn test_rejection_shows_message_and_keeps_form() {
    let (server, client) = setup().await;
    let message = "Não foi possível alterar UF no banco de dados. Não existe UF com o código 5.";

    Mock::given(method("PUT"))
        .and(path("/uf"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "mensagem": message, "status": 404 })),
        )
        .mount(&server)
        .await;
    mount_uf_list(&server, 0).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let mut form = sp_form("5", "1");

    let outcome = controller.submit(&mut form).await;

    match outcome {
        SubmitOutcome::Rejected { message: ref got } => assert_eq!(got, message),
        other => panic!("expected rejection, got: {other:?}"),
    }
    assert_eq!(form, sp_form("5", "1"));
    controller
        .with_view(|view| {
            assert_eq!(view.error, message);
            assert!(view.notices.is_empty());
            assert_eq!(view.renders, 0);
        })
        .await;
}

#[tokio::test]
async fn test_success_clears_previous_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "mensagem": "sigla repetida" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    mount_uf_list(&server, 1).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let mut form = sp_form("", "1");

    assert!(!controller.submit(&mut form).await.is_saved());
    controller
        .with_view(|view| assert_eq!(view.error, "sigla repetida"))
        .await;

    assert!(controller.submit(&mut form).await.is_saved());
    controller.with_view(|view| assert!(view.error.is_empty())).await;
}

#[tokio::test]
async fn test_other_failures_are_silent() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    mount_uf_list(&server, 0).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    controller.with_view(|view| view.error = "old".into()).await;
    let mut form = sp_form("", "1");

    let outcome = controller.submit(&mut form).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form, sp_form("", "1"));
    controller
        .with_view(|view| {
            assert_eq!(view.error, "old");
            assert!(view.notices.is_empty());
        })
        .await;
}

#[tokio::test]
async fn test_municipio_create_scenario() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/municipio"))
        .and(body_json(json!({ "codigoUF": 1, "nome": "Campinas", "status": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/municipio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let controller: EntityController<Municipio, _> =
        EntityController::new(client, RecordingView::default());
    let mut form = MunicipioForm {
        codigo_uf: "1".into(),
        nome: "  Campinas".into(),
        status: "1".into(),
        ..MunicipioForm::default()
    };

    assert!(controller.submit(&mut form).await.is_saved());
    controller
        .with_view(|view| assert_eq!(view.notices, ["Município salvo com sucesso!"]))
        .await;
}

#[tokio::test]
async fn test_overlapping_submits_are_counted_in_state() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/uf"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .expect(2)
        .mount(&server)
        .await;
    mount_uf_list(&server, 2).await;

    let controller: EntityController<Uf, _> =
        EntityController::new(client, RecordingView::default());
    let mut states = controller.subscribe_state();
    assert_eq!(*states.borrow(), ControllerState::Idle);

    let peak = async move {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                states.changed().await.unwrap();
                let current = *states.borrow_and_update();
                if current == (ControllerState::Submitting { in_flight: 2 }) {
                    return current;
                }
            }
        })
        .await
        .unwrap()
    };

    let mut first = sp_form("", "1");
    let mut second = sp_form("", "1");
    let (a, b, seen) = tokio::join!(
        controller.submit(&mut first),
        controller.submit(&mut second),
        peak
    );

    assert_eq!(seen, ControllerState::Submitting { in_flight: 2 });
    assert!(a.is_saved() && b.is_saved());
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(*controller.subscribe_state().borrow(), ControllerState::Idle);
}

// ── Person controller ───────────────────────────────────────────────

fn ana() -> PessoaForm {
    PessoaForm {
        nome: "Ana".into(),
        sobrenome: "Souza".into(),
        idade: "30".into(),
        login: "ana".into(),
        senha: "segredo".into(),
        status: "1".into(),
        ..PessoaForm::default()
    }
}

#[tokio::test]
async fn test_address_slots_are_sent_in_order() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/pessoa"))
        .and(body_json(json!({
            "nome": "Ana",
            "sobrenome": "Souza",
            "idade": 30,
            "login": "ana",
            "senha": "segredo",
            "status": 1,
            "enderecos": [
                { "codigoBairro": 1, "nomeRua": "Rua 1", "numero": "1", "complemento": "", "cep": "00000-001" },
                { "codigoBairro": 2, "nomeRua": "Rua 2", "numero": "2", "complemento": "", "cep": "00000-002" },
                { "codigoBairro": 3, "nomeRua": "Rua 3", "numero": "3", "complemento": "", "cep": "00000-003" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pessoa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let controller = PersonController::new(client, RecordingView::default());
    let mut form = ana();
    for n in 1..=3 {
        let slot = controller.add_address_slot(&mut form);
        slot.codigo_bairro = n.to_string();
        slot.nome_rua = format!("  Rua {n} ");
        slot.numero = format!("{n} ");
        slot.cep = format!(" 00000-00{n}");
    }

    let outcome = controller.submit(&mut form).await;

    assert!(outcome.is_saved(), "unexpected outcome: {outcome:?}");
    assert_eq!(form.enderecos.len(), 3);
    assert!(form.enderecos.iter().all(|e| e.nome_rua.is_empty()));
    assert!(form.nome.is_empty());
}

#[tokio::test]
async fn test_person_with_code_updates_with_addresses() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/pessoa"))
        .and(body_json(json!({
            "codigoPessoa": 9,
            "nome": "Ana",
            "sobrenome": "Souza",
            "idade": 30,
            "login": "ana",
            "senha": "segredo",
            "status": 1,
            "enderecos": [
                { "codigoBairro": 4, "nomeRua": "Av. Brasil", "numero": "5", "complemento": "Bloco B, Apto 3", "cep": "02000-000" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pessoa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let controller = PersonController::new(client, RecordingView::default());
    let mut form = PessoaForm {
        codigo_pessoa: "9".into(),
        ..ana()
    };
    let slot = controller.add_address_slot(&mut form);
    slot.codigo_bairro = " 4".into();
    slot.nome_rua = "Av. Brasil ".into();
    slot.numero = "5".into();
    slot.complemento = " Bloco B, Apto 3 ".into();
    slot.cep = "02000-000".into();

    let outcome = controller.submit(&mut form).await;

    assert!(outcome.is_saved(), "unexpected outcome: {outcome:?}");
    assert!(form.codigo_pessoa.is_empty());
    controller
        .with_view(|view| assert_eq!(view.notices, ["Pessoa salva com sucesso!"]))
        .await;
}

#[tokio::test]
async fn test_view_addresses_fetches_by_query_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pessoa"))
        .and(query_param("codigoPessoa", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "codigoPessoa": 42,
            "nome": "Ana",
            "status": 1,
            "enderecos": [
                { "codigoBairro": 3, "nomeRua": "Rua das Flores", "numero": "100", "complemento": "Apto 1", "cep": "01000-000" },
                { "codigoBairro": 4, "nomeRua": "Av. Brasil", "numero": "5", "complemento": "", "cep": "02000-000" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = PersonController::new(client, RecordingView::default());
    let mut form = ana();
    controller.add_address_slot(&mut form);

    let lines = controller.view_addresses(42).await.unwrap();

    assert_eq!(
        lines,
        [
            "Rua: Rua das Flores, Número: 100, Complemento: Apto 1, CEP: 01000-000",
            "Rua: Av. Brasil, Número: 5, Complemento: , CEP: 02000-000",
        ]
    );
    controller
        .with_view(|view| assert_eq!(view.overlay.as_deref(), Some(lines.as_slice())))
        .await;

    controller.close_addresses().await;
    controller.with_view(|view| assert!(view.overlay.is_none())).await;
    assert_eq!(form.enderecos.len(), 1);
    assert_eq!(form.nome, "Ana");
}

#[tokio::test]
async fn test_view_addresses_unknown_person_opens_empty_overlay() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pessoa"))
        .and(query_param("codigoPessoa", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let controller = PersonController::new(client, RecordingView::default());
    let lines = controller.view_addresses(7).await.unwrap();

    assert!(lines.is_empty());
    controller
        .with_view(|view| assert_eq!(view.overlay, Some(Vec::new())))
        .await;
}

#[tokio::test]
async fn test_person_rows_target_the_person() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pessoa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "codigoPessoa": 42, "nome": "Ana", "sobrenome": "Souza", "idade": 30, "status": 1 }
        ])))
        .mount(&server)
        .await;

    let controller = PersonController::new(client, RecordingView::default());
    controller.list().await.unwrap();

    controller
        .with_view(|view| {
            assert_eq!(view.rows[0].cells, ["42", "Ana", "Souza", "30", "Ativo"]);
            assert_eq!(view.rows[0].target, Some(42));
        })
        .await;
}
