// src/common/tests.rs

#[cfg(test)]
mod rule_tests {
    use crate::common::rules;

    #[test]
    fn test_non_required_rules_pass_on_blank_input() {
        let optional = [
            rules::email(),
            rules::min_length(5),
            rules::max_length(5),
            rules::phone(),
            rules::password(),
            rules::strong_password(),
            rules::date(),
            rules::cpf(),
        ];

        for rule in &optional {
            assert_eq!(rule.apply(None), None, "{:?} failed on absent value", rule);
            assert_eq!(rule.apply(Some("")), None, "{:?} failed on empty value", rule);
        }
    }

    #[test]
    fn test_required() {
        let rule = rules::required();
        assert!(rule.apply(None).is_some());
        assert!(rule.apply(Some("")).is_some());
        assert!(rule.apply(Some("   ")).is_some());
        assert_eq!(rule.apply(Some("x")), None);
    }

    #[test]
    fn test_email() {
        let rule = rules::email();
        assert_eq!(rule.apply(Some("a@b.com")), None);
        assert_eq!(rule.apply(Some("maria.souza@clinica.com.br")), None);
        assert!(rule.apply(Some("not-an-email")).is_some());
        assert!(rule.apply(Some("a@b")).is_some());
        assert!(rule.apply(Some("a b@c.com")).is_some());
    }

    #[test]
    fn test_length_rules() {
        assert_eq!(rules::min_length(3).apply(Some("abc")), None);
        assert!(rules::min_length(3).apply(Some("ab")).is_some());
        assert_eq!(rules::max_length(3).apply(Some("abc")), None);
        assert!(rules::max_length(3).apply(Some("abcd")).is_some());
        // Accented chars count as one character, not two bytes
        assert_eq!(rules::max_length(4).apply(Some("João")), None);
    }

    #[test]
    fn test_phone_accepts_only_full_mask() {
        let rule = rules::phone();
        assert_eq!(rule.apply(Some("(11) 99999-9999")), None);
        assert_eq!(rule.apply(Some("(11) 3333-4444")), None);
        // Raw digits must go through the formatter first
        assert!(rule.apply(Some("11999999999")).is_some());
        assert!(rule.apply(Some("(11)99999-9999")).is_some());
        assert!(rule.apply(Some("(11) 99999 9999")).is_some());
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(rules::password().apply(Some("123456")), None);
        assert!(rules::password().apply(Some("12345")).is_some());

        let strong = rules::strong_password();
        assert_eq!(strong.apply(Some("Senha123")), None);
        assert!(strong.apply(Some("senha123")).is_some(), "no uppercase");
        assert!(strong.apply(Some("SENHA123")).is_some(), "no lowercase");
        assert!(strong.apply(Some("Senhafor")).is_some(), "no digit");
        assert!(strong.apply(Some("Se1")).is_some(), "too short");
    }

    #[test]
    fn test_date_checks_the_calendar() {
        let rule = rules::date();
        assert_eq!(rule.apply(Some("15/12/2024")), None);
        assert_eq!(rule.apply(Some("29/02/2024")), None, "2024 is a leap year");
        assert!(rule.apply(Some("29/02/2023")).is_some());
        assert!(rule.apply(Some("31/02/2024")).is_some());
        assert!(rule.apply(Some("00/01/2024")).is_some());
        assert!(rule.apply(Some("15/13/2024")).is_some());
        assert!(rule.apply(Some("2024-12-15")).is_some(), "wrong format");
        assert!(rule.apply(Some("1/1/2024")).is_some(), "missing zero padding");
    }

    #[test]
    fn test_cpf_check_digits() {
        let rule = rules::cpf();
        // Well-known valid CPF, masked and unmasked
        assert_eq!(rule.apply(Some("529.982.247-25")), None);
        assert_eq!(rule.apply(Some("52998224725")), None);
        // Flipping the last digit breaks the second check digit
        assert!(rule.apply(Some("529.982.247-24")).is_some());
        // Flipping the first check digit
        assert!(rule.apply(Some("529.982.247-35")).is_some());
        assert!(rule.apply(Some("123")).is_some());
        assert!(rule.apply(Some("529.982.247-2")).is_some(), "10 digits");
    }

    #[test]
    fn test_custom_rule_sees_blank_input() {
        let rule = rules::custom(|value| value.is_some(), "Selecione uma opção");
        assert_eq!(rule.apply(Some("")), None);
        assert_eq!(rule.apply(None), Some("Selecione uma opção"));
    }

    #[test]
    fn test_message_override() {
        let rule = rules::required().message("Informe o nome");
        assert_eq!(rule.apply(Some("")), Some("Informe o nome"));
    }
}

#[cfg(test)]
mod schema_tests {
    use std::collections::HashMap;

    use crate::common::{rules, Schema};

    fn schema() -> Schema {
        Schema::builder()
            .field("email", [rules::required(), rules::email()])
            .field("phone", [rules::phone()])
            .build()
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Empty email violates required; the email-format rule never runs
        let error = schema().validate_field("email", Some("")).unwrap();
        assert_eq!(error.message, "Este campo é obrigatório");

        let error = schema().validate_field("email", Some("bad")).unwrap();
        assert_eq!(error.message, "Email inválido");
    }

    #[test]
    fn test_unknown_field_validates_clean() {
        assert!(schema().validate_field("cpf", Some("junk")).is_none());
    }

    #[test]
    fn test_extra_data_keys_are_ignored() {
        let mut data: HashMap<&str, &str> = HashMap::new();
        data.insert("email", "a@b.com");
        data.insert("phone", "(11) 99999-9999");
        data.insert("cpf", "not validated");

        let result = schema().validate(&data);
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_optional_field_passes() {
        let mut data: HashMap<&str, &str> = HashMap::new();
        data.insert("email", "a@b.com");
        // phone absent entirely: only required() rejects absence

        assert!(schema().validate(&data).is_valid);
    }

    #[test]
    fn test_validate_field_is_idempotent() {
        let s = schema();
        let first = s.validate_field("email", Some("bad"));
        let second = s.validate_field("email", Some("bad"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_error_lookup() {
        let mut data: HashMap<&str, &str> = HashMap::new();
        data.insert("email", "");
        data.insert("phone", "123");

        let result = schema().validate(&data);
        assert_eq!(result.field_error("email"), Some("Este campo é obrigatório"));
        assert_eq!(result.field_error("phone"), Some("Telefone inválido"));
        assert_eq!(result.field_error("cpf"), None);
    }

    #[test]
    fn test_merge_combines_results() {
        let mut data: HashMap<&str, &str> = HashMap::new();
        data.insert("email", "");

        let mut combined = schema().validate(&data);
        let mut other = crate::common::ValidationResult::new();
        other.add_error("cpf", "CPF inválido");
        combined.merge(other);

        assert!(!combined.is_valid);
        assert_eq!(combined.errors.len(), 2);
    }
}

#[cfg(test)]
mod format_tests {
    use crate::common::format;

    #[test]
    fn test_phone_progressive_mask() {
        assert_eq!(format::phone("1"), "1");
        assert_eq!(format::phone("11"), "11");
        assert_eq!(format::phone("119"), "(11) 9");
        assert_eq!(format::phone("119999"), "(11) 9999");
        assert_eq!(format::phone("1199999"), "(11) 9999-9");
        assert_eq!(format::phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format::phone("11999999999"), "(11) 99999-9999");
    }

    #[test]
    fn test_phone_idempotent_on_masked_input() {
        assert_eq!(format::phone("(11) 99999-9999"), "(11) 99999-9999");
        assert_eq!(format::phone("(11) 3333-4444"), "(11) 3333-4444");
    }

    #[test]
    fn test_phone_drops_overflow_digits() {
        assert_eq!(format::phone("119999999999999"), "(11) 99999-9999");
    }

    #[test]
    fn test_cpf_progressive_mask() {
        assert_eq!(format::cpf("529"), "529");
        assert_eq!(format::cpf("5299"), "529.9");
        assert_eq!(format::cpf("5299822"), "529.982.2");
        assert_eq!(format::cpf("529982247"), "529.982.247");
        assert_eq!(format::cpf("52998224725"), "529.982.247-25");
        assert_eq!(format::cpf("529.982.247-25"), "529.982.247-25");
    }

    #[test]
    fn test_date_progressive_mask() {
        assert_eq!(format::date("1"), "1");
        assert_eq!(format::date("15"), "15");
        assert_eq!(format::date("151"), "15/1");
        assert_eq!(format::date("1512"), "15/12");
        assert_eq!(format::date("15122"), "15/12/2");
        assert_eq!(format::date("15122024"), "15/12/2024");
        assert_eq!(format::date("15/12/2024"), "15/12/2024");
        assert_eq!(format::date("151220249"), "15/12/2024");
    }

    #[test]
    fn test_masks_keep_digit_order() {
        // Masking only inserts separators; the digit sequence survives
        let full = "52998224725";
        for n in 1..=full.len() {
            let masked = format::cpf(&full[..n]);
            let back: String = masked.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(back, full[..n]);
        }
    }
}

#[cfg(test)]
mod error_tests {
    use crate::common::error::{classify, ApiFailure, AppError, ErrorHandler, ErrorKind};
    use crate::common::notify::error_title;

    #[test]
    fn test_http_status_table() {
        let cases = [
            (400, ErrorKind::Validation),
            (401, ErrorKind::Authentication),
            (403, ErrorKind::Authorization),
            (404, ErrorKind::NotFound),
            (500, ErrorKind::Server),
            (418, ErrorKind::Unknown),
            (502, ErrorKind::Unknown),
        ];

        for (status, kind) in cases {
            let error = classify(&ApiFailure::Http {
                status,
                message: None,
            });
            assert_eq!(error.kind, kind, "status {}", status);
            assert_eq!(error.status_code, Some(status));
        }
    }

    #[test]
    fn test_server_message_wins_over_default() {
        let error = classify(&ApiFailure::Http {
            status: 404,
            message: Some("Cliente não encontrado".to_string()),
        });
        assert_eq!(error.message, "Cliente não encontrado");

        let error = classify(&ApiFailure::Http {
            status: 404,
            message: None,
        });
        assert_eq!(error.message, "Recurso não encontrado.");
    }

    #[test]
    fn test_network_failure() {
        let error = classify(&ApiFailure::Network);
        assert_eq!(error.kind, ErrorKind::Network);
        assert_eq!(error.message, "Erro de conexão. Verifique sua internet.");
        assert_eq!(error.status_code, None);
    }

    #[test]
    fn test_app_error_passes_through_unchanged() {
        let original = AppError::validation("Email já registrado").with_field("email");
        let classified = classify(&ApiFailure::App(original.clone()));
        assert_eq!(classified, original);
    }

    #[test]
    fn test_other_failure_keeps_its_message() {
        let error = classify(&ApiFailure::Other("boom".to_string()));
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.message, "boom");
    }

    #[test]
    fn test_blank_other_failure_gets_default_message() {
        let error = classify(&ApiFailure::Other(String::new()));
        assert_eq!(error.message, "Erro desconhecido");
    }

    #[test]
    fn test_handle_logs_and_returns_classification() {
        // handle() adds a tracing tail call; the classification itself
        // must match the pure path
        let failure = ApiFailure::Http {
            status: 401,
            message: None,
        };
        let handled = ErrorHandler::handle(&failure, "auth.login");
        assert_eq!(handled, classify(&failure));
    }

    #[test]
    fn test_constructor_status_codes() {
        assert_eq!(AppError::authentication().status_code, Some(401));
        assert_eq!(AppError::authorization().status_code, Some(403));
        assert_eq!(AppError::not_found().status_code, Some(404));
        assert_eq!(AppError::server().status_code, Some(500));
        assert_eq!(AppError::network().status_code, None);
    }

    #[test]
    fn test_error_titles() {
        assert_eq!(error_title(ErrorKind::Network), "Erro de Conexão");
        assert_eq!(error_title(ErrorKind::Validation), "Dados Inválidos");
        assert_eq!(error_title(ErrorKind::Authentication), "Erro de Autenticação");
        assert_eq!(error_title(ErrorKind::Authorization), "Acesso Negado");
        assert_eq!(error_title(ErrorKind::NotFound), "Não Encontrado");
        assert_eq!(error_title(ErrorKind::Server), "Erro do Servidor");
        assert_eq!(error_title(ErrorKind::Unknown), "Erro");
    }

    #[test]
    fn test_display_uses_message() {
        let error = AppError::not_found();
        assert_eq!(error.to_string(), "Recurso não encontrado.");
    }
}
