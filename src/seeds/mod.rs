pub mod admin_list_seed;
