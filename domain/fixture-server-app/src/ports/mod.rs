pub mod team_directory;
