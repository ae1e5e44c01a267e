use crate::layout::{Group, ProjectLayout};

pub const BASE_DIR: &str = "lib";

/// Feature-module skeleton of the mobile client, rooted at `lib/`.
pub static LAYOUT: ProjectLayout = ProjectLayout::new(GROUPS);

static GROUPS: &[Group] = &[
    Group::new("lib", &[]),
    // app shell
    Group::new("lib/app", &["app.dart", "theme.dart", "router.dart"]),
    // core
    Group::new("lib/core", &[]),
    Group::new(
        "lib/core/constants",
        &[
            "api_constants.dart",
            "app_constants.dart",
            "asset_constants.dart",
            "storage_keys.dart",
        ],
    ),
    Group::new(
        "lib/core/enums",
        &[
            "transaction_type.dart",
            "transaction_status.dart",
            "notification_type.dart",
            "document_type.dart",
            "task_type.dart",
            "payment_gateway.dart",
        ],
    ),
    Group::new(
        "lib/core/exceptions",
        &["api_exception.dart", "auth_exception.dart", "app_exception.dart"],
    ),
    Group::new(
        "lib/core/services",
        &[
            "api_service.dart",
            "auth_service.dart",
            "storage_service.dart",
            "biometric_service.dart",
            "device_service.dart",
            "notification_service.dart",
        ],
    ),
    Group::new(
        "lib/core/utils",
        &[
            "validators.dart",
            "formatters.dart",
            "snackbar_utils.dart",
            "navigation_utils.dart",
        ],
    ),
    // features
    Group::new("lib/features", &[]),
    Group::new("lib/features/auth", &[]),
    Group::new("lib/features/auth/models", &["auth_request.dart"]),
    Group::new("lib/features/auth/providers", &["auth_provider.dart"]),
    Group::new("lib/features/auth/repositories", &["auth_repository.dart"]),
    Group::new(
        "lib/features/auth/screens",
        &[
            "login_screen.dart",
            "register_screen.dart",
            "verify_email_screen.dart",
            "forgot_password_screen.dart",
        ],
    ),
    Group::new(
        "lib/features/auth/widgets",
        &["auth_button.dart", "auth_text_field.dart"],
    ),
    Group::new("lib/features/home", &[]),
    Group::new("lib/features/home/providers", &["home_provider.dart"]),
    Group::new("lib/features/home/repositories", &["home_repository.dart"]),
    Group::new(
        "lib/features/home/screens",
        &["home_screen.dart", "main_screen.dart"],
    ),
    Group::new(
        "lib/features/home/widgets",
        &[
            "balance_card.dart",
            "profit_chart.dart",
            "quick_actions.dart",
            "recent_transactions.dart",
        ],
    ),
    Group::new("lib/features/plans", &[]),
    Group::new("lib/features/plans/models", &["plan_purchase_request.dart"]),
    Group::new("lib/features/plans/providers", &["plans_provider.dart"]),
    Group::new("lib/features/plans/repositories", &["plans_repository.dart"]),
    Group::new(
        "lib/features/plans/screens",
        &["plans_screen.dart", "plan_details_screen.dart"],
    ),
    Group::new(
        "lib/features/plans/widgets",
        &[
            "plan_card.dart",
            "plan_comparison.dart",
            "purchase_plan_dialog.dart",
        ],
    ),
    Group::new("lib/features/wallet", &[]),
    Group::new(
        "lib/features/wallet/models",
        &["deposit_request.dart", "withdrawal_request.dart"],
    ),
    Group::new(
        "lib/features/wallet/providers",
        &[
            "wallet_provider.dart",
            "deposit_provider.dart",
            "withdrawal_provider.dart",
        ],
    ),
    Group::new(
        "lib/features/wallet/repositories",
        &[
            "wallet_repository.dart",
            "deposit_repository.dart",
            "withdrawal_repository.dart",
        ],
    ),
    Group::new(
        "lib/features/wallet/screens",
        &[
            "wallet_screen.dart",
            "deposit_screen.dart",
            "withdrawal_screen.dart",
            "transactions_screen.dart",
        ],
    ),
    Group::new(
        "lib/features/wallet/widgets",
        &[
            "payment_method_card.dart",
            "transaction_list_item.dart",
            "withdrawal_status_card.dart",
        ],
    ),
    Group::new("lib/features/tasks", &[]),
    Group::new("lib/features/tasks/providers", &["tasks_provider.dart"]),
    Group::new("lib/features/tasks/repositories", &["tasks_repository.dart"]),
    Group::new("lib/features/tasks/screens", &["tasks_screen.dart"]),
    Group::new("lib/features/tasks/widgets", &["task_card.dart"]),
    Group::new("lib/features/referrals", &[]),
    Group::new(
        "lib/features/referrals/providers",
        &["referrals_provider.dart"],
    ),
    Group::new(
        "lib/features/referrals/repositories",
        &["referrals_repository.dart"],
    ),
    Group::new("lib/features/referrals/screens", &["referrals_screen.dart"]),
    Group::new(
        "lib/features/referrals/widgets",
        &["referral_card.dart", "share_referral_dialog.dart"],
    ),
    Group::new("lib/features/kyc", &[]),
    Group::new("lib/features/kyc/models", &["kyc_submission.dart"]),
    Group::new("lib/features/kyc/providers", &["kyc_provider.dart"]),
    Group::new("lib/features/kyc/repositories", &["kyc_repository.dart"]),
    Group::new(
        "lib/features/kyc/screens",
        &["kyc_screen.dart", "document_upload_screen.dart"],
    ),
    Group::new(
        "lib/features/kyc/widgets",
        &["document_type_selector.dart", "document_preview.dart"],
    ),
    Group::new("lib/features/profile", &[]),
    Group::new("lib/features/profile/providers", &["profile_provider.dart"]),
    Group::new(
        "lib/features/profile/repositories",
        &["profile_repository.dart"],
    ),
    Group::new(
        "lib/features/profile/screens",
        &[
            "profile_screen.dart",
            "edit_profile_screen.dart",
            "change_password_screen.dart",
        ],
    ),
    Group::new(
        "lib/features/profile/widgets",
        &["profile_header.dart", "settings_tile.dart"],
    ),
    Group::new("lib/features/news", &[]),
    Group::new("lib/features/news/providers", &["news_provider.dart"]),
    Group::new("lib/features/news/repositories", &["news_repository.dart"]),
    Group::new(
        "lib/features/news/screens",
        &["news_screen.dart", "news_detail_screen.dart"],
    ),
    Group::new("lib/features/news/widgets", &["news_card.dart"]),
    Group::new("lib/features/notifications", &[]),
    Group::new(
        "lib/features/notifications/providers",
        &["notifications_provider.dart"],
    ),
    Group::new(
        "lib/features/notifications/repositories",
        &["notifications_repository.dart"],
    ),
    Group::new(
        "lib/features/notifications/screens",
        &["notifications_screen.dart"],
    ),
    Group::new(
        "lib/features/notifications/widgets",
        &["notification_item.dart"],
    ),
    // shared
    Group::new(
        "lib/models",
        &[
            "user.dart",
            "transaction.dart",
            "plan.dart",
            "task.dart",
            "referral.dart",
            "kyc_document.dart",
            "notification.dart",
            "news.dart",
            "payment.dart",
            "withdrawal.dart",
        ],
    ),
    Group::new(
        "lib/providers",
        &["global_providers.dart", "app_state_provider.dart"],
    ),
    Group::new("lib/repositories", &["base_repository.dart"]),
    Group::new("lib/shared", &[]),
    Group::new(
        "lib/shared/widgets",
        &[
            "app_bar.dart",
            "loading_button.dart",
            "error_widget.dart",
            "empty_state_widget.dart",
            "custom_text_field.dart",
            "bottom_sheet.dart",
            "animated_loader.dart",
        ],
    ),
    // entry point
    Group::new("lib", &["main.dart"]),
];
