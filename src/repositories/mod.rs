pub mod robot_repo;
